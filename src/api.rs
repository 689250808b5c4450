pub mod openrouteservice;
