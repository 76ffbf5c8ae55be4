mod voice_flow_tests;
