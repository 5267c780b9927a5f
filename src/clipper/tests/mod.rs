pub mod clipper_tests;
