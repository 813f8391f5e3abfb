mod dashboard_tests;
mod maintenance_tests;
mod payments_tests;
mod reservations_tests;
