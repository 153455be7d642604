//! Site locales and the interface strings the blog pages need.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Offset from the Common Era to the Thai Buddhist Era.
const BUDDHIST_ERA_OFFSET: i32 = 543;

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const TH_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Site language.
///
/// Thai is the default locale; the root page redirects to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Th,
    En,
}

/// Interface strings used by blog pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Home,
    BlogTitle,
    BlogSubtitle,
    BackToBlog,
    ReadingTime,
    RelatedPosts,
    ReadMore,
    AllCategories,
    AuthorBio,
    ContactLine,
    NoPosts,
}

impl Locale {
    /// Every locale a page is generated for, default first.
    pub const ALL: [Locale; 2] = [Locale::Th, Locale::En];

    /// Returns the URL path segment for this locale.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Th => "th",
            Locale::En => "en",
        }
    }

    /// Returns the BCP 47 tag used for `lang` attributes and `inLanguage`.
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Th => "th-TH",
            Locale::En => "en-US",
        }
    }

    /// Parses a URL path segment.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "th" => Some(Locale::Th),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Returns the interface string for `label` in this locale.
    pub fn text(self, label: Label) -> &'static str {
        match (self, label) {
            (Locale::Th, Label::Home) => "หน้าแรก",
            (Locale::En, Label::Home) => "Home",
            (Locale::Th, Label::BlogTitle) => "บทความ",
            (Locale::En, Label::BlogTitle) => "Blog",
            (Locale::Th, Label::BlogSubtitle) => {
                "ความรู้ด้านเว็บไซต์ SEO และการตลาดออนไลน์สำหรับธุรกิจของคุณ"
            }
            (Locale::En, Label::BlogSubtitle) => {
                "Insights on websites, SEO and online marketing for your business"
            }
            (Locale::Th, Label::BackToBlog) => "กลับไปหน้าบทความ",
            (Locale::En, Label::BackToBlog) => "Back to blog",
            (Locale::Th, Label::ReadingTime) => "นาที",
            (Locale::En, Label::ReadingTime) => "min read",
            (Locale::Th, Label::RelatedPosts) => "บทความที่เกี่ยวข้อง",
            (Locale::En, Label::RelatedPosts) => "Related posts",
            (Locale::Th, Label::ReadMore) => "อ่านต่อ",
            (Locale::En, Label::ReadMore) => "Read more",
            (Locale::Th, Label::AllCategories) => "ทั้งหมด",
            (Locale::En, Label::AllCategories) => "All",
            (Locale::Th, Label::AuthorBio) => "ทีมงานผู้เชี่ยวชาญด้านเว็บไซต์และการตลาดดิจิทัล",
            (Locale::En, Label::AuthorBio) => {
                "Expert team in website development and digital marketing"
            }
            (Locale::Th, Label::ContactLine) => "ติดต่อทาง LINE",
            (Locale::En, Label::ContactLine) => "Contact via LINE",
            (Locale::Th, Label::NoPosts) => "ยังไม่มีบทความ",
            (Locale::En, Label::NoPosts) => "No posts yet",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats a calendar date the way each locale writes long dates
///
/// English uses `January 15, 2025`. Thai uses day, month name and the
/// Buddhist Era year, for example `15 มกราคม 2568`.
///
/// # Arguments
///
/// * `date`: Calendar date
/// * `locale`: Target locale
///
/// # Returns
///
/// Long form date string
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let month = date.month0() as usize;

    match locale {
        Locale::En => format!("{} {}, {}", EN_MONTHS[month], date.day(), date.year()),
        Locale::Th => format!(
            "{} {} {}",
            date.day(),
            TH_MONTHS[month],
            date.year() + BUDDHIST_ERA_OFFSET
        ),
    }
}
