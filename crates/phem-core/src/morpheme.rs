// Morphemic segmentation: grouping per-letter tags into morphemes and the
// `text:LABEL/text:LABEL` parse notation of the segmentation corpus.

use crate::PhemError;
use crate::letter::UniString;
use crate::word_form::PhemTag;

/// Morpheme label of the parse notation.
///
/// Finer than [`PhemTag`]: linking vowels, hyphens, postfixes and numerals
/// keep their own label even though they all tag as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphemeLabel {
    Pref,
    Root,
    Suff,
    End,
    Unkn,
    Link,
    Hyph,
    Postfix,
    Numb,
}

impl MorphemeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            MorphemeLabel::Pref => "PREF",
            MorphemeLabel::Root => "ROOT",
            MorphemeLabel::Suff => "SUFF",
            MorphemeLabel::End => "END",
            MorphemeLabel::Unkn => "UNKN",
            MorphemeLabel::Link => "LINK",
            MorphemeLabel::Hyph => "HYPH",
            MorphemeLabel::Postfix => "POSTFIX",
            MorphemeLabel::Numb => "NUMB",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let label = match name {
            "PREF" => MorphemeLabel::Pref,
            "ROOT" => MorphemeLabel::Root,
            "SUFF" => MorphemeLabel::Suff,
            "END" => MorphemeLabel::End,
            "UNKN" => MorphemeLabel::Unkn,
            "LINK" => MorphemeLabel::Link,
            "HYPH" => MorphemeLabel::Hyph,
            "POSTFIX" => MorphemeLabel::Postfix,
            "NUMB" => MorphemeLabel::Numb,
            _ => return None,
        };
        Some(label)
    }

    /// Per-letter tag of the label.
    pub fn tag(self) -> PhemTag {
        match self {
            MorphemeLabel::Pref => PhemTag::Prefix,
            MorphemeLabel::Root => PhemTag::Root,
            MorphemeLabel::Suff => PhemTag::Suffix,
            MorphemeLabel::End => PhemTag::Ending,
            _ => PhemTag::Unknown,
        }
    }
}

impl From<PhemTag> for MorphemeLabel {
    fn from(tag: PhemTag) -> Self {
        match tag {
            PhemTag::Prefix => MorphemeLabel::Pref,
            PhemTag::Root => MorphemeLabel::Root,
            PhemTag::Suffix => MorphemeLabel::Suff,
            PhemTag::Ending => MorphemeLabel::End,
            PhemTag::Unknown => MorphemeLabel::Unkn,
        }
    }
}

/// A morpheme of a word: a run of letters with one label.
///
/// Morphemes built from per-letter tags are maximal runs; parsed morphemes
/// keep the corpus boundaries, so neighbours may share a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub text: String,
    pub tag: PhemTag,
    pub label: MorphemeLabel,
    /// Letter offset of the first letter within the word.
    pub begin: usize,
    /// Length in letters.
    pub len: usize,
}

impl Morpheme {
    /// Letter offset one past the last letter.
    pub fn end(&self) -> usize {
        self.begin + self.len
    }
}

/// Group consecutive equal tags into morphemes.
pub fn segment(word: &UniString, tags: &[PhemTag]) -> Result<Vec<Morpheme>, PhemError> {
    if word.len() != tags.len() {
        return Err(PhemError::ShapeMismatch {
            expected: word.len(),
            actual: tags.len(),
        });
    }

    let mut morphemes: Vec<Morpheme> = Vec::new();
    for (i, (letter, &tag)) in word.letters().iter().zip(tags).enumerate() {
        match morphemes.last_mut() {
            Some(last) if last.tag == tag => {
                last.text.push_str(letter.as_str());
                last.len += 1;
            }
            _ => morphemes.push(Morpheme {
                text: letter.as_str().to_string(),
                tag,
                label: tag.into(),
                begin: i,
                len: 1,
            }),
        }
    }
    Ok(morphemes)
}

/// Render morphemes as `text:LABEL` joined by `/`.
pub fn format_parse(morphemes: &[Morpheme]) -> String {
    morphemes
        .iter()
        .map(|m| format!("{}:{}", m.text, m.label.as_str()))
        .collect::<Vec<_>>()
        .join("/")
}

/// Parse `text:LABEL/text:LABEL` notation.
pub fn parse_morphemic(parse: &str) -> Result<Vec<Morpheme>, PhemError> {
    let mut morphemes = Vec::new();
    let mut begin = 0;
    for part in parse.split('/') {
        let (text, label) = part
            .rsplit_once(':')
            .ok_or_else(|| PhemError::InvalidParse(parse.to_string()))?;
        let label = MorphemeLabel::from_name(label)
            .ok_or_else(|| PhemError::InvalidParse(parse.to_string()))?;
        let len = UniString::new(text).len();
        if len == 0 {
            return Err(PhemError::InvalidParse(parse.to_string()));
        }
        morphemes.push(Morpheme {
            text: text.to_string(),
            tag: label.tag(),
            label,
            begin,
            len,
        });
        begin += len;
    }
    Ok(morphemes)
}

/// Expand morphemes back into one tag per letter.
pub fn tags_of(morphemes: &[Morpheme]) -> Vec<PhemTag> {
    morphemes
        .iter()
        .flat_map(|m| std::iter::repeat_n(m.tag, m.len))
        .collect()
}
