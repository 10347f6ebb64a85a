//! Wall-clock timestamps for locally created messages.

/// Current UTC time as an ISO-8601 string, matching the backend's
/// `createdAt` format.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use time::format_description::well_known::Rfc3339;
        time::OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
    }
}
