//! User Context - Value Objects

use chrono::{Datelike, NaiveDate};

use super::UserError;

/// 出生日期的线上格式（`YYYY-MM-DD`）
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// 用户名
///
/// 不变量: 至少 2 个字符（按 Unicode 字符计数，不做 trim）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub const MIN_CHARS: usize = 2;

    pub fn new(name: impl Into<String>) -> Result<Self, UserError> {
        let name = name.into();
        if name.is_empty() {
            return Err(UserError::InvalidName("name is required".to_string()));
        }
        if name.chars().count() < Self::MIN_CHARS {
            return Err(UserError::InvalidName(format!(
                "name must be at least {} characters",
                Self::MIN_CHARS
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 出生日期
///
/// 纯日历日期，无时间和时区部分。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// 严格解析 `YYYY-MM-DD`
    ///
    /// 年份必须 4 位，月、日必须 2 位补零，不允许前后多余字符。
    pub fn parse(input: &str) -> Result<Self, UserError> {
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(UserError::InvalidDateOfBirth(input.to_string()));
        }

        NaiveDate::parse_from_str(input, DOB_FORMAT)
            .map(Self)
            .map_err(|_| UserError::InvalidDateOfBirth(input.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// 格式化为 `YYYY-MM-DD`
    pub fn format(&self) -> String {
        self.0.format(DOB_FORMAT).to_string()
    }

    /// 计算截至 `today` 的年龄
    ///
    /// 年份差，若今天的 day-of-year 严格小于出生日的 day-of-year 则减 1。
    /// 比较的是一年中的第几天而不是月/日，闰年前后会有一天的偏差。
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.0.year();
        if today.ordinal() < self.0.ordinal() {
            age -= 1;
        }
        age
    }
}

impl std::fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
