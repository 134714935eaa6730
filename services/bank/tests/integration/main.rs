mod access_test;
mod offering_test;
mod register_test;
