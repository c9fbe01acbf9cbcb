//! Tests for login, logout and the public landing endpoints.

mod logout;
mod pages;
mod request_otp;
mod verify_otp;

use super::*;
