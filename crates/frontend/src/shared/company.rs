//! Company details shown across the site

pub const NAME: &str = "Sobti Enterprises";
pub const TAGLINE: &str = "Authorized dealer of premium electrical goods since 2014";
pub const PHONE: &str = "+91 98120 52133";
pub const PHONE_HREF: &str = "tel:+919812052133";
pub const EMAIL: &str = "sobtienterprises02@gmail.com";
pub const ADDRESS_LINES: [&str; 3] = [
    "1944, Dholkot Area",
    "Ambala Cantt, Ambala",
    "Haryana 134007, India",
];
pub const HOURS: &str = "Mon-Sat: 9:00 AM - 6:00 PM";
