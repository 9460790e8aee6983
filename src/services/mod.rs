pub mod forward_service;
