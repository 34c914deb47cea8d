pub mod api_test;
