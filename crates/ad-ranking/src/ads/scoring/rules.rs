use super::super::domain::{Ad, Picture, Typology};
use super::config::{ScoringRules, DESCRIPTION_DELIMITERS};
use super::{ScoreComponent, ScoreRule};

/// Number of words in a description once punctuation is treated as whitespace.
pub fn count_words(text: &str) -> usize {
    text.replace(DESCRIPTION_DELIMITERS, " ")
        .split_whitespace()
        .count()
}

pub(crate) fn score_ad(
    ad: &Ad,
    pictures: &[Picture],
    rules: &ScoringRules,
) -> (Vec<ScoreComponent>, i32) {
    let mut components = Vec::new();

    score_pictures(pictures, rules, &mut components);

    let description = ad.description_text();
    if let Some(text) = description {
        score_description(ad.typology, text, rules, &mut components);
    }

    if is_complete(ad, !pictures.is_empty(), description.is_some()) {
        components.push(ScoreComponent {
            rule: ScoreRule::Completion,
            points: rules.completion_points,
            notes: format!("{} listing is complete", ad.typology.label().to_lowercase()),
        });
    }

    let total = components.iter().map(|component| component.points).sum();
    (components, total)
}

fn score_pictures(
    pictures: &[Picture],
    rules: &ScoringRules,
    components: &mut Vec<ScoreComponent>,
) {
    if pictures.is_empty() {
        components.push(ScoreComponent {
            rule: ScoreRule::MissingPictures,
            points: rules.missing_pictures_penalty,
            notes: "ad has no pictures".to_string(),
        });
        return;
    }

    for picture in pictures {
        components.push(ScoreComponent {
            rule: ScoreRule::Picture,
            points: rules.picture_points(picture.quality),
            notes: format!("{:?} picture {}", picture.quality, picture.url),
        });
    }
}

fn score_description(
    typology: Typology,
    text: &str,
    rules: &ScoringRules,
    components: &mut Vec<ScoreComponent>,
) {
    components.push(ScoreComponent {
        rule: ScoreRule::Description,
        points: rules.description_points,
        notes: "ad has a description".to_string(),
    });

    let words = count_words(text);
    if let Some(tier) = rules.word_count_tier(typology, words) {
        components.push(ScoreComponent {
            rule: ScoreRule::DescriptionLength,
            points: tier.points,
            notes: format!("{words} words reaches the {}-word tier", tier.min_words),
        });
    }

    let lowered = text.to_lowercase();
    for bonus in rules.keyword_bonuses {
        if lowered.contains(&bonus.keyword.to_lowercase()) {
            components.push(ScoreComponent {
                rule: ScoreRule::Keyword,
                points: bonus.points,
                notes: format!("mentions '{}'", bonus.keyword),
            });
        }
    }
}

fn is_complete(ad: &Ad, has_pictures: bool, has_description: bool) -> bool {
    let has_house_size = ad.house_size.is_some();
    match ad.typology {
        Typology::Flat => has_pictures && has_description && has_house_size,
        Typology::Chalet => {
            has_pictures && has_description && has_house_size && ad.garden_size.is_some()
        }
        Typology::Garage => has_pictures && has_house_size,
    }
}
