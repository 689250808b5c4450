quantity!(PricePerLitre, via: f64, suffix: "GBP/l", precision: 2);
