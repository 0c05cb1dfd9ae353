// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl byline_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        // 固定時刻なのでアサーションが安定する
        super::time::fixed_now()
    }
}

#[derive(Clone)]
pub struct DummySlug;

impl byline_core::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        // 小文字化と空白のハイフン置換だけの簡易スラッガー
        s.to_lowercase().replace(' ', "-")
    }
}
