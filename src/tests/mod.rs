mod integration_flag_service;
