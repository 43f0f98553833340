/// Endpoint path constants shared across crates
pub const EMPLOYEE_ROUTE: &str = "/Employee";
pub const POSITION_ROUTE: &str = "/position";
pub const SCHEDULE_ROUTE: &str = "/Schedule";

pub const AUTH_ROUTE_COMPONENT: &str = "auth";
pub const AUTH_ROUTE_PREFIX: &str = const_str::concat!("/", AUTH_ROUTE_COMPONENT);

pub const LOGIN_ROUTE: &str = const_str::concat!(AUTH_ROUTE_PREFIX, "/login");
pub const REGISTER_ROUTE: &str = const_str::concat!(AUTH_ROUTE_PREFIX, "/register");
