//! Wall clock backed by `Date.now()`.

use time::OffsetDateTime;
use toolkit::calendar::Clock;

#[derive(Clone, Copy, Debug, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now(&self) -> OffsetDateTime {
        #[cfg(feature = "csr")]
        {
            #[allow(clippy::cast_possible_truncation)]
            let millis = js_sys::Date::now() as i64;
            toolkit::calendar::from_unix_millis(millis).unwrap_or(OffsetDateTime::UNIX_EPOCH)
        }
        #[cfg(not(feature = "csr"))]
        {
            OffsetDateTime::now_utc()
        }
    }
}
