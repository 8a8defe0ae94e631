mod domain_tests;
