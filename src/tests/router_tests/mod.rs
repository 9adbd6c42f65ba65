mod listings_tests;
mod pdf_route_tests;
