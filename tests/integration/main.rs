//! Integration tests running the services over the in-memory store.

mod helpers;

mod company_test;
mod persistence_test;
mod profession_test;
