mod type_registry_builder_tests;
