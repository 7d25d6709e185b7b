//! Set parser: raw set text to `WordRecord`s.
//!
//! Records are newline-separated; fields within a record are separated by a
//! configurable delimiter and trimmed. The first field is the headword.
//! Malformed lines are skipped, never reported.

use kotoba_config::ParserConfig;
use kotoba_core::entities::WordRecord;
use kotoba_core::ids::new_word_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetParser {
    delimiter: char,
    min_fields: usize,
}

impl Default for SetParser {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}

impl SetParser {
    #[must_use]
    pub const fn new(delimiter: char, min_fields: usize) -> Self {
        Self {
            delimiter,
            min_fields,
        }
    }

    #[must_use]
    pub const fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.delimiter, config.min_fields)
    }

    /// Parse every usable line of `content`, preserving line order.
    #[must_use]
    pub fn parse(&self, content: &str) -> Vec<WordRecord> {
        content
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect()
    }

    /// Parse one line; `None` for blank, short, or headword-less lines.
    #[must_use]
    pub fn parse_line(&self, line: &str) -> Option<WordRecord> {
        let mut fields = self.split(line)?.into_iter().map(String::from);
        let headword = fields.next()?;
        Some(WordRecord {
            id: new_word_id(),
            headword,
            fields: fields.collect(),
            origin_set: None,
            origin_line: None,
        })
    }

    /// Headwords only, under the same line rules as [`Self::parse`].
    pub fn headwords<'a>(&self, content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let parser = *self;
        content
            .lines()
            .filter_map(move |line| parser.split(line).and_then(|f| f.first().copied()))
    }

    fn split<'a>(&self, line: &'a str) -> Option<Vec<&'a str>> {
        if line.trim().is_empty() {
            return None;
        }
        let fields: Vec<&str> = line.split(self.delimiter).map(str::trim).collect();
        if fields.len() < self.min_fields || fields[0].is_empty() {
            return None;
        }
        Some(fields)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_example_set() {
        let parser = SetParser::new(',', 4);
        let words = parser.parse("猫,cat,ねこ,neko\n犬,dog,いぬ,inu");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].headword, "猫");
        assert_eq!(words[0].fields, vec!["cat", "ねこ", "neko"]);
        assert_eq!(words[1].headword, "犬");
        assert_ne!(words[0].id, words[1].id);
        assert!(words[0].origin_set.is_none());
    }

    #[test]
    fn trims_fields_and_skips_blank_lines() {
        let parser = SetParser::new(',', 4);
        let words = parser.parse("\n   \n 猫 , cat ,ねこ , neko \r\n\n犬,dog,いぬ,inu,extra\n");

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].headword, "猫");
        assert_eq!(words[0].fields, vec!["cat", "ねこ", "neko"]);
        assert_eq!(words[1].fields, vec!["dog", "いぬ", "inu", "extra"]);
    }

    #[rstest]
    #[case("猫,cat,ねこ", 4, 0)]
    #[case("猫,cat,ねこ", 3, 1)]
    #[case("猫", 1, 1)]
    #[case("   ", 1, 0)]
    #[case(",cat,ねこ,neko", 4, 0)]
    fn minimum_field_count(#[case] line: &str, #[case] min_fields: usize, #[case] expected: usize) {
        let parser = SetParser::new(',', min_fields);
        assert_eq!(parser.parse(line).len(), expected);
    }

    #[test]
    fn delimiter_is_configurable() {
        let parser = SetParser::new(';', 4);
        let words = parser.parse("猫;cat;ねこ;neko\n犬,dog,いぬ,inu");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].headword, "猫");
    }

    #[test]
    fn headwords_follow_parse_rules() {
        let parser = SetParser::new(',', 4);
        let content = "猫,cat,ねこ,neko\nshort,line\n\n犬,dog,いぬ,inu";
        let headwords: Vec<&str> = parser.headwords(content).collect();
        assert_eq!(headwords, vec!["猫", "犬"]);
    }

    #[test]
    fn default_parser_uses_canonical_settings() {
        assert_eq!(SetParser::default(), SetParser::new(',', 4));
    }
}
