#![allow(missing_docs)]

pub(crate) mod db;
pub(crate) mod http;

pub(crate) use db::{
    create_test_category, get_category_state, get_subcategory_state, get_test_db_connection,
};
pub(crate) use http::{get_header, parse_json_body};
