//! Tax calculation modules.
//!
//! Both jurisdictions share the marginal bracket integrator in
//! [`brackets`]; the jurisdiction modules layer their own deduction rules
//! and post-processing (rebate and cess for India, FICA for the USA) on
//! top of it.

pub mod brackets;
pub mod common;
pub mod india;
pub mod usa;
