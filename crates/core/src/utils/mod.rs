pub mod date_utils;
