use super::super::domain::{PictureQuality, Typology};

/// Description length bonus; a tier applies when the word count reaches `min_words`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCountTier {
    pub min_words: usize,
    pub points: i32,
}

/// Fixed bonus for a keyword found anywhere in the description, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordBonus {
    pub keyword: &'static str,
    pub points: i32,
}

/// Point table driving the score calculation.
///
/// Tiers are listed from the highest threshold down; the first one reached wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub hd_picture_points: i32,
    pub standard_picture_points: i32,
    pub missing_pictures_penalty: i32,
    pub description_points: i32,
    pub flat_word_tiers: &'static [WordCountTier],
    pub chalet_word_tiers: &'static [WordCountTier],
    pub garage_word_tiers: &'static [WordCountTier],
    pub keyword_bonuses: &'static [KeywordBonus],
    pub completion_points: i32,
    pub relevance_threshold: i32,
}

pub const RELEVANCE_THRESHOLD: i32 = 40;

/// Characters treated as word separators in addition to whitespace.
pub const DESCRIPTION_DELIMITERS: [char; 11] =
    ['|', ';', ':', ',', '.', '\'', '"', '¡', '!', '¿', '?'];

const FLAT_WORD_TIERS: [WordCountTier; 2] = [
    WordCountTier {
        min_words: 50,
        points: 30,
    },
    WordCountTier {
        min_words: 20,
        points: 10,
    },
];

const CHALET_WORD_TIERS: [WordCountTier; 1] = [WordCountTier {
    min_words: 51,
    points: 20,
}];

const KEYWORD_BONUSES: [KeywordBonus; 4] = [
    KeywordBonus {
        keyword: "Luminoso",
        points: 5,
    },
    KeywordBonus {
        keyword: "Nuevo",
        points: 5,
    },
    KeywordBonus {
        keyword: "Reformado",
        points: 5,
    },
    KeywordBonus {
        keyword: "Ático",
        points: 5,
    },
];

impl ScoringRules {
    pub const fn standard() -> Self {
        Self {
            hd_picture_points: 20,
            standard_picture_points: 10,
            missing_pictures_penalty: -10,
            description_points: 5,
            flat_word_tiers: &FLAT_WORD_TIERS,
            chalet_word_tiers: &CHALET_WORD_TIERS,
            garage_word_tiers: &[],
            keyword_bonuses: &KEYWORD_BONUSES,
            completion_points: 40,
            relevance_threshold: RELEVANCE_THRESHOLD,
        }
    }

    pub const fn picture_points(&self, quality: PictureQuality) -> i32 {
        match quality {
            PictureQuality::Hd => self.hd_picture_points,
            PictureQuality::Standard => self.standard_picture_points,
        }
    }

    pub const fn word_tiers(&self, typology: Typology) -> &'static [WordCountTier] {
        match typology {
            Typology::Flat => self.flat_word_tiers,
            Typology::Chalet => self.chalet_word_tiers,
            Typology::Garage => self.garage_word_tiers,
        }
    }

    pub fn word_count_tier(&self, typology: Typology, words: usize) -> Option<WordCountTier> {
        self.word_tiers(typology)
            .iter()
            .find(|tier| words >= tier.min_words)
            .copied()
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::standard()
    }
}
