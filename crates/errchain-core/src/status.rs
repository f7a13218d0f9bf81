//! HTTP status codes passed through to the request layer.

use strum_macros::{Display, EnumIter, FromRepr, IntoStaticStr};

/// Closed set of registered HTTP status codes (100-599).
///
/// `Display` renders the reason phrase, e.g. `Not Found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter, FromRepr)]
#[repr(u16)]
pub enum HttpStatus {
    // =========================================================================
    // Informational (1xx)
    // =========================================================================
    #[strum(serialize = "Continue")]
    Continue = 100,
    #[strum(serialize = "Switching Protocols")]
    SwitchingProtocols = 101,
    #[strum(serialize = "Processing")]
    Processing = 102,
    #[strum(serialize = "Early Hints")]
    EarlyHints = 103,

    // =========================================================================
    // Success (2xx)
    // =========================================================================
    #[strum(serialize = "OK")]
    Ok = 200,
    #[strum(serialize = "Created")]
    Created = 201,
    #[strum(serialize = "Accepted")]
    Accepted = 202,
    #[strum(serialize = "Non-Authoritative Information")]
    NonAuthoritativeInformation = 203,
    #[strum(serialize = "No Content")]
    NoContent = 204,
    #[strum(serialize = "Reset Content")]
    ResetContent = 205,
    #[strum(serialize = "Partial Content")]
    PartialContent = 206,
    #[strum(serialize = "Multi-Status")]
    MultiStatus = 207,
    #[strum(serialize = "Already Reported")]
    AlreadyReported = 208,
    #[strum(serialize = "IM Used")]
    ImUsed = 226,

    // =========================================================================
    // Redirection (3xx)
    // =========================================================================
    #[strum(serialize = "Multiple Choices")]
    MultipleChoices = 300,
    #[strum(serialize = "Moved Permanently")]
    MovedPermanently = 301,
    #[strum(serialize = "Found")]
    Found = 302,
    #[strum(serialize = "See Other")]
    SeeOther = 303,
    #[strum(serialize = "Not Modified")]
    NotModified = 304,
    #[strum(serialize = "Use Proxy")]
    UseProxy = 305,
    #[strum(serialize = "Temporary Redirect")]
    TemporaryRedirect = 307,
    #[strum(serialize = "Permanent Redirect")]
    PermanentRedirect = 308,

    // =========================================================================
    // Client errors (4xx)
    // =========================================================================
    #[strum(serialize = "Bad Request")]
    BadRequest = 400,
    #[strum(serialize = "Unauthorized")]
    Unauthorized = 401,
    #[strum(serialize = "Payment Required")]
    PaymentRequired = 402,
    #[strum(serialize = "Forbidden")]
    Forbidden = 403,
    #[strum(serialize = "Not Found")]
    NotFound = 404,
    #[strum(serialize = "Method Not Allowed")]
    MethodNotAllowed = 405,
    #[strum(serialize = "Not Acceptable")]
    NotAcceptable = 406,
    #[strum(serialize = "Proxy Authentication Required")]
    ProxyAuthenticationRequired = 407,
    #[strum(serialize = "Request Timeout")]
    RequestTimeout = 408,
    #[strum(serialize = "Conflict")]
    Conflict = 409,
    #[strum(serialize = "Gone")]
    Gone = 410,
    #[strum(serialize = "Length Required")]
    LengthRequired = 411,
    #[strum(serialize = "Precondition Failed")]
    PreconditionFailed = 412,
    #[strum(serialize = "Content Too Large")]
    ContentTooLarge = 413,
    #[strum(serialize = "URI Too Long")]
    UriTooLong = 414,
    #[strum(serialize = "Unsupported Media Type")]
    UnsupportedMediaType = 415,
    #[strum(serialize = "Range Not Satisfiable")]
    RangeNotSatisfiable = 416,
    #[strum(serialize = "Expectation Failed")]
    ExpectationFailed = 417,
    #[strum(serialize = "I'm a teapot")]
    ImATeapot = 418,
    #[strum(serialize = "Misdirected Request")]
    MisdirectedRequest = 421,
    #[strum(serialize = "Unprocessable Content")]
    UnprocessableContent = 422,
    #[strum(serialize = "Locked")]
    Locked = 423,
    #[strum(serialize = "Failed Dependency")]
    FailedDependency = 424,
    #[strum(serialize = "Too Early")]
    TooEarly = 425,
    #[strum(serialize = "Upgrade Required")]
    UpgradeRequired = 426,
    #[strum(serialize = "Precondition Required")]
    PreconditionRequired = 428,
    #[strum(serialize = "Too Many Requests")]
    TooManyRequests = 429,
    #[strum(serialize = "Request Header Fields Too Large")]
    RequestHeaderFieldsTooLarge = 431,
    #[strum(serialize = "Unavailable For Legal Reasons")]
    UnavailableForLegalReasons = 451,

    // =========================================================================
    // Server errors (5xx)
    // =========================================================================
    #[strum(serialize = "Internal Server Error")]
    InternalServerError = 500,
    #[strum(serialize = "Not Implemented")]
    NotImplemented = 501,
    #[strum(serialize = "Bad Gateway")]
    BadGateway = 502,
    #[strum(serialize = "Service Unavailable")]
    ServiceUnavailable = 503,
    #[strum(serialize = "Gateway Timeout")]
    GatewayTimeout = 504,
    #[strum(serialize = "HTTP Version Not Supported")]
    HttpVersionNotSupported = 505,
    #[strum(serialize = "Variant Also Negotiates")]
    VariantAlsoNegotiates = 506,
    #[strum(serialize = "Insufficient Storage")]
    InsufficientStorage = 507,
    #[strum(serialize = "Loop Detected")]
    LoopDetected = 508,
    #[strum(serialize = "Not Extended")]
    NotExtended = 510,
    #[strum(serialize = "Network Authentication Required")]
    NetworkAuthenticationRequired = 511,
}

impl HttpStatus {
    /// Numeric status code.
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::from_repr(code)
    }

    /// Reason phrase, e.g. `Too Many Requests`.
    pub fn reason(self) -> &'static str {
        self.into()
    }

    pub fn is_informational(self) -> bool {
        (100..200).contains(&self.code())
    }

    pub fn is_success(self) -> bool {
        (200..300).contains(&self.code())
    }

    pub fn is_redirection(self) -> bool {
        (300..400).contains(&self.code())
    }

    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.code())
    }

    pub fn is_server_error(self) -> bool {
        (500..600).contains(&self.code())
    }

    pub fn is_error(self) -> bool {
        self.code() >= 400
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> Self {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_code_round_trip() {
        assert_eq!(HttpStatus::NotFound.code(), 404);
        assert_eq!(HttpStatus::from_code(429), Some(HttpStatus::TooManyRequests));
        assert_eq!(HttpStatus::from_code(299), None);
        assert_eq!(HttpStatus::from_code(600), None);
    }

    #[test]
    fn test_reason_phrase() {
        assert_eq!(HttpStatus::NotFound.to_string(), "Not Found");
        assert_eq!(HttpStatus::Ok.reason(), "OK");
        assert_eq!(HttpStatus::ImATeapot.reason(), "I'm a teapot");
    }

    #[test]
    fn test_classes() {
        assert!(HttpStatus::Continue.is_informational());
        assert!(HttpStatus::Created.is_success());
        assert!(HttpStatus::SeeOther.is_redirection());
        assert!(HttpStatus::Conflict.is_client_error());
        assert!(HttpStatus::BadGateway.is_server_error());
        assert!(HttpStatus::Forbidden.is_error());
        assert!(!HttpStatus::Accepted.is_error());
    }

    #[test]
    fn test_all_codes_in_range() {
        for status in HttpStatus::iter() {
            assert!((100..600).contains(&status.code()), "{status:?}");
        }
        assert_eq!(HttpStatus::iter().count(), 62);
    }
}
