//! # Library to work with fields of MARC 21 records
//!
//! A [`Field`] is either a control field (tags `000`-`009`, data only) or a data field (two
//! indicators and an ordered list of subfields). Fields are written as binary MARC (the data area
//! representation used inside a record) or as MARCMaker text.
//!
//! ## Examples
//!
//! ### Creating
//!
//! ```rust
//! # use marc_field::*;
//! # fn main() -> marc_field::Result<()> {
//! let field = field!("245", ['1', '0'], [
//!     'a' => "The pragmatic programmer : ",
//!     'b' => "from journeyman to master /",
//!     'c' => "Andrew Hunt, David Thomas.",
//! ])?;
//! assert_eq!(field.get('c').map(String::as_str), Some("Andrew Hunt, David Thomas."));
//!
//! let control = field!("1" => "fol05731351")?;
//! assert_eq!(control.get_tag(), "001");
//! assert!(control.is_control_field());
//! # marc_field::Result::Ok(())
//! # }
//! ```
//!
//! ### Updating
//!
//! ```rust
//! # use marc_field::*;
//! # fn main() -> marc_field::Result<()> {
//! let mut field = field!("650", [' ', '0'], [
//!     'a' => "Python (Computer program language)",
//!     'x' => "History",
//! ])?;
//! field.add_subfield('v', "Poetry.")?;
//! field.sort();
//! field.set('a', "Rust (Computer program language)")?;
//! assert_eq!(field.delete_subfield('x').as_deref(), Some("History"));
//!
//! assert_eq!(field.to_string(), "=650  \\0$aRust (Computer program language)$vPoetry.");
//! assert_eq!(field.format_field(), "Rust (Computer program language) -- Poetry.");
//! # marc_field::Result::Ok(())
//! # }
//! ```
//!
//! ### Writing
//!
//! ```rust
//! # use marc_field::*;
//! # fn main() -> marc_field::Result<()> {
//! let field = field!("979", [' ', ' '], ['a' => "autoref", 'a' => "dlopen"])?;
//! assert_eq!(field.as_marc(Encoding::Utf8)?, b"  \x1Faautoref\x1Fadlopen\x1E");
//!
//! let raw = RawField::parse("979", b"  \x1Faautoref\x1Fadlopen\x1E")?;
//! assert_eq!(raw.as_marc(None)?, field.as_marc(Encoding::Utf8)?);
//! assert_eq!(raw.decode(Encoding::Utf8)?, field);
//! # marc_field::Result::Ok(())
//! # }
//! ```

#![warn(missing_debug_implementations, rust_2018_idioms, future_incompatible)]
#![cfg_attr(feature = "nightly", feature(test))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "nightly")]
extern crate test;

mod encoding;
pub mod errors;
mod field;
mod identifier;
mod indicator;
mod tag;
#[cfg(feature = "xml")]
#[cfg_attr(docsrs, doc(cfg(feature = "xml")))]
pub mod xml;

pub use errors::*;

#[doc(inline)]
pub use encoding::Encoding;
#[doc(inline)]
pub use field::map_marc8_field;
#[doc(inline)]
pub use field::raw::RawField;
#[doc(inline)]
pub use field::subfield::subfields::Subfields;
#[doc(inline)]
pub use field::subfield::Subfield;
#[doc(inline)]
pub use field::Field;
#[doc(inline)]
pub use field::FieldData;
#[doc(inline)]
pub use identifier::Identifier;
#[doc(inline)]
pub use indicator::Indicator;
#[doc(inline)]
pub use tag::Tag;

/// Ends every field in binary MARC.
pub const FIELD_TERMINATOR: u8 = 0x1E;
/// Starts every subfield in binary MARC.
pub const SUBFIELD_DELIMITER: u8 = 0x1F;

#[macro_export]
/// Creates a `Field` (or a `RawField` with the `raw` prefix).
///
/// ```rust
/// # use marc_field::{field, Field, RawField};
/// let control: Field = field!("001" => "foo").unwrap();
/// let data: Field = field!("856", ['4', '1'], [
///     'q' => "bar",
///     'u' => "baz",
/// ]).unwrap();
/// let raw: RawField = field!(raw "856", ['4', '1'], [b'u' => &b"baz"[..]]).unwrap();
/// # assert_eq!(data.to_string(), "=856  41$qbar$ubaz");
/// # assert_eq!(raw.get('u').map(Vec::as_slice), Some(&b"baz"[..]));
/// # assert!(control.is_control_field());
/// ```
macro_rules! field {
    (raw $tag:expr => $data:expr) => (
        $crate::RawField::with_data($tag, ::std::vec::Vec::<u8>::from($data))
    );
    (raw $tag:expr, $ind:expr, [$($sfident:expr => $sfdata:expr),* $(,)?]) => ({
        let sfs: ::std::vec::Vec<($crate::Identifier, ::std::vec::Vec<u8>)> = ::std::vec![
            $(($crate::Identifier::from($sfident), ::std::vec::Vec::<u8>::from($sfdata))),*
        ];
        $crate::RawField::new($tag, &$ind, sfs)
    });
    ($tag:expr => $data:expr) => (
        $crate::Field::<::std::string::String>::with_data(
            $tag,
            ::std::string::String::from($data),
        )
    );
    ($tag:expr, $ind:expr, [$($sfident:expr => $sfdata:expr),* $(,)?]) => ({
        let sfs: ::std::vec::Vec<($crate::Identifier, ::std::string::String)> = ::std::vec![
            $(($crate::Identifier::from($sfident), ::std::string::String::from($sfdata))),*
        ];
        $crate::Field::<::std::string::String>::new($tag, &$ind, sfs)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Field {
        field!("245", ['0', '1'], ['a' => "1", 'b' => "2", 'a' => "3"]).unwrap()
    }

    #[test]
    fn should_classify_tag_boundary() {
        for tag in &["000", "001", "005", "008", "009"] {
            assert!(field!(*tag => "x").unwrap().is_control_field());
        }
        for tag in &["010", "100", "245", "999", "abc", "00a"] {
            let field: Field = Field::new(*tag, &[' ', ' '], vec![('a', "x")]).unwrap();
            assert!(!field.is_control_field());
        }
    }

    #[test]
    fn should_sort_with_non_decreasing_codes() {
        let mut field = field!("500", [' ', ' '], [
            'z' => "1", 'b' => "2", 'a' => "3", 'b' => "4", '9' => "5", 'a' => "6",
        ])
        .unwrap();
        field.sort();
        let codes: Vec<_> = field.subfields().map(Subfield::get_identifier).collect();
        assert!(codes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(field.get_subfields(&['a']), vec!["3", "6"]);
        assert_eq!(field.get_subfields(&['b']), vec!["2", "4"]);
    }

    #[test]
    fn should_restore_count_after_add_and_delete() {
        let mut field = sample();
        let before = field.count('q');
        field.add_subfield('q', "v").unwrap();
        assert_eq!(field.delete_subfield_matching('q', "v").as_deref(), Some("v"));
        assert_eq!(field.count('q'), before);
        assert_eq!(field, sample());
    }

    #[test]
    fn should_round_trip_through_binary() {
        let fields = vec![
            sample(),
            field!("001" => "000000002").unwrap(),
            field!("264", [' ', '1'], ['a' => "León, Spain"]).unwrap(),
            field!("264", ['ä', '1'], ['ø' => "Tromsø"]).unwrap(),
            Field::new("979", &[' ', ' '], Vec::<(char, String)>::new()).unwrap(),
        ];
        for encoding in &[Encoding::Utf8, Encoding::Latin1] {
            for field in &fields {
                let marc = field.as_marc(*encoding).unwrap();
                assert_eq!(marc.last(), Some(&FIELD_TERMINATOR));
                let parsed = Field::<String>::parse(field.get_tag(), &marc, *encoding).unwrap();
                assert_eq!(&parsed, field);
            }
        }
    }

    #[test]
    fn should_display_like_marcmaker() {
        assert_eq!(sample().to_string(), "=245  01$a1$b2$a3");
        assert_eq!(field!("008", [], []).unwrap().to_string(), "=008  ");
    }

    #[cfg(feature = "nightly")]
    mod bench {
        use super::{super::*, sample};
        use test;

        #[bench]
        fn as_marc(b: &mut test::Bencher) {
            let field = sample();
            b.iter(|| test::black_box(field.as_marc(Encoding::Utf8).unwrap()));
        }

        #[bench]
        fn parse_raw(b: &mut test::Bencher) {
            let data = sample().as_marc(Encoding::Utf8).unwrap();
            b.iter(|| test::black_box(RawField::parse("245", &data).unwrap()));
            b.bytes += data.len() as u64;
        }
    }
}
