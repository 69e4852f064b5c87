//! Fuzz target: query-string decoding of the signup/unregister `email`
//! parameter.
//!
//! Arbitrary bytes are parsed as a request URI, decoded into query pairs,
//! and reduced to an `EmailParam`. Errors are expected; panics are not.

#![no_main]

use axum::{extract::Query, http::Uri};
use libfuzzer_sys::fuzz_target;
use signup_gateway::extract::EmailParam;

fuzz_target!(|data: &[u8]| {
    let Ok(uri) = Uri::try_from(data) else {
        return;
    };
    if let Ok(Query(pairs)) = Query::<Vec<(String, String)>>::try_from_uri(&uri) {
        let _ = EmailParam::from_pairs(pairs);
    }
});
