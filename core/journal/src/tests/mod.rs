mod support;

mod http_run_tests;
