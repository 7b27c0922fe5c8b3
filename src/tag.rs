use std::fmt;

/// Tag of a field.
///
/// Numeric input is normalized to three zero-padded digits (`245`, `"1"` → `"001"`). Anything
/// else is right-justified to a width of three; longer tags are kept as is.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag(String);

impl Tag {
    /// Creates a normalized tag.
    pub fn new<S: AsRef<str>>(tag: S) -> Tag {
        let tag = tag.as_ref();
        match tag.trim().parse::<i64>() {
            Ok(num) => Tag::from_number(num),
            Err(_) => Tag(format!("{:>3}", tag)),
        }
    }

    fn from_number(num: i64) -> Tag {
        Tag(format!("{:03}", num))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Control fields (`000`-`009`) have data only, no indicators or subfields.
    pub fn is_control_field(&self) -> bool {
        !self.0.is_empty()
            && self.0.bytes().all(|b| b.is_ascii_digit())
            && self.0.as_str() < "010"
    }

    /// Subject access fields are the `6XX` block.
    pub fn is_subject_field(&self) -> bool {
        self.0.starts_with('6')
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&'_ str> for Tag {
    fn eq(&self, other: &&'_ str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Tag> for str {
    fn eq(&self, other: &Tag) -> bool {
        *other == *self
    }
}

impl PartialEq<Tag> for &'_ str {
    fn eq(&self, other: &Tag) -> bool {
        *other == *self
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'_ str> for Tag {
    fn from(s: &'_ str) -> Tag {
        Tag::new(s)
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Tag {
        Tag::new(s)
    }
}

impl From<&'_ String> for Tag {
    fn from(s: &'_ String) -> Tag {
        Tag::new(s)
    }
}

impl From<&'_ Tag> for Tag {
    fn from(t: &'_ Tag) -> Tag {
        t.clone()
    }
}

macro_rules! tag_from_int {
    ($($ty:ty),*) => (
        $(
            impl From<$ty> for Tag {
                fn from(num: $ty) -> Tag {
                    Tag::from_number(num as i64)
                }
            }
        )*
    );
}

tag_from_int!(i8, i16, i32, i64, u8, u16, u32);

#[cfg(test)]
mod test {
    use super::Tag;

    #[test]
    fn should_normalize_numeric_tags() {
        assert_eq!(Tag::from("245"), "245");
        assert_eq!(Tag::from("1"), "001");
        assert_eq!(Tag::from(" 45 "), "045");
        assert_eq!(Tag::from(8), "008");
        assert_eq!(Tag::from(650u16), "650");
        assert_eq!(Tag::from(-1), "-01");
    }

    #[test]
    fn should_pad_non_numeric_tags() {
        assert_eq!(Tag::from("ab"), " ab");
        assert_eq!(Tag::from("LDR"), "LDR");
        assert_eq!(Tag::from(""), "   ");
    }

    #[test]
    fn should_keep_long_tags() {
        assert_eq!(Tag::from("abcd"), "abcd");
        assert_eq!(Tag::from("1234"), "1234");
    }

    #[test]
    fn should_classify_control_tags() {
        for num in 0..10 {
            assert!(Tag::from(num).is_control_field(), "{}", num);
        }
        assert!(!Tag::from("010").is_control_field());
        assert!(!Tag::from("245").is_control_field());
        assert!(!Tag::from("00a").is_control_field());
        assert!(!Tag::from("LDR").is_control_field());
        assert!(!Tag::from("").is_control_field());
        assert!(!Tag::from(-1).is_control_field());
    }

    #[test]
    fn should_detect_subject_tags() {
        assert!(Tag::from(650).is_subject_field());
        assert!(Tag::from("600").is_subject_field());
        assert!(!Tag::from("245").is_subject_field());
    }
}
