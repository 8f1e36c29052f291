pub mod ship_controller;
