use serde::{Deserialize, Serialize};

/// One historical check-in, as recorded by the caller. The core never stores
/// these; they arrive with the request and leave with the response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CheckIn {
    pub mood: String,
    pub mood_score: f32,
    pub energy_level: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub insights: String,
    pub recommendations: String,
}

/// Plain-text weekly insights over a series of check-ins. Returns `None`
/// when there is nothing to summarize.
pub fn summarize(check_ins: &[CheckIn]) -> Option<Summary> {
    if check_ins.is_empty() {
        return None;
    }

    let count = check_ins.len() as f32;
    let avg_score: f32 = check_ins.iter().map(|c| c.mood_score).sum::<f32>() / count;
    let avg_energy: f32 = check_ins.iter().map(|c| c.energy_level).sum::<f32>() / count;
    let most_common = most_common_mood(check_ins);

    let mut insights = format!(
        "This week, your average mood score was {avg_score:.1}/10 and your average \
         energy level was {avg_energy:.1}/10. You most frequently reported feeling \
         {most_common}. "
    );
    if check_ins.len() >= 3 {
        let first = check_ins[0].mood_score;
        let last = check_ins[check_ins.len() - 1].mood_score;
        if last > first {
            insights.push_str("Your mood has been improving over the week. ");
        } else if last < first {
            insights.push_str("Your mood has slightly declined over the week. ");
        } else {
            insights.push_str("Your mood has remained relatively stable. ");
        }
    }

    let mut recommendations =
        "Based on your mood patterns this week, consider the following:\n\n".to_owned();
    if avg_score < 4.0 {
        recommendations.push_str(
            "• Your mood has been on the lower side. Consider scheduling time with a \
             trusted friend or mental health professional.\n• Set aside time each day for \
             self-care activities that have helped you feel better in the past.\n",
        );
    } else if avg_score < 7.0 {
        recommendations.push_str(
            "• Your mood has been moderate. Pay attention to what activities boost your \
             mood and try to incorporate more of them.\n• Practice mindfulness or \
             meditation to help maintain emotional balance.\n",
        );
    } else {
        recommendations.push_str(
            "• Your mood has been positive! Reflect on what's working well and continue \
             these practices.\n",
        );
    }
    if avg_energy < 4.0 {
        recommendations
            .push_str("• Your energy has been low. Check your sleep quality and quantity.\n");
    } else if avg_energy > 7.0 {
        recommendations.push_str(
            "• You've had high energy. Channel this productively into activities that \
             matter to you.\n",
        );
    }

    Some(Summary {
        insights,
        recommendations,
    })
}

/// Most frequent mood label; ties resolve to the first encountered.
fn most_common_mood(check_ins: &[CheckIn]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for check_in in check_ins {
        match counts.iter_mut().find(|(mood, _)| *mood == check_in.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((&check_in.mood, 1)),
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (mood, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood.to_owned())
        .unwrap_or_else(|| "neutral".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_in(mood: &str, score: f32, energy: f32) -> CheckIn {
        CheckIn {
            mood: mood.to_owned(),
            mood_score: score,
            energy_level: energy,
        }
    }

    #[test]
    fn empty_history_yields_nothing() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn averages_and_most_common_mood_appear_in_insights() {
        let summary = summarize(&[
            check_in("happy", 8.0, 7.0),
            check_in("happy", 6.0, 5.0),
            check_in("sad", 4.0, 3.0),
        ])
        .expect("non-empty");
        assert!(summary.insights.contains("6.0/10"));
        assert!(summary.insights.contains("5.0/10"));
        assert!(summary.insights.contains("feeling happy"));
    }

    #[test]
    fn trend_sentence_requires_three_check_ins() {
        let short = summarize(&[check_in("happy", 3.0, 5.0), check_in("happy", 8.0, 5.0)])
            .expect("non-empty");
        assert!(!short.insights.contains("improving"));

        let improving = summarize(&[
            check_in("happy", 3.0, 5.0),
            check_in("neutral", 5.0, 5.0),
            check_in("happy", 8.0, 5.0),
        ])
        .expect("non-empty");
        assert!(improving.insights.contains("improving"));

        let declining = summarize(&[
            check_in("happy", 8.0, 5.0),
            check_in("neutral", 5.0, 5.0),
            check_in("sad", 3.0, 5.0),
        ])
        .expect("non-empty");
        assert!(declining.insights.contains("declined"));
    }

    #[test]
    fn low_average_mood_suggests_reaching_out() {
        let summary = summarize(&[check_in("sad", 2.0, 2.0)]).expect("non-empty");
        assert!(summary.recommendations.contains("trusted friend"));
        assert!(summary.recommendations.contains("energy has been low"));
    }

    #[test]
    fn high_averages_celebrate_and_redirect_energy() {
        let summary = summarize(&[check_in("happy", 9.0, 9.0)]).expect("non-empty");
        assert!(summary.recommendations.contains("positive!"));
        assert!(summary.recommendations.contains("high energy"));
    }

    #[test]
    fn mood_ties_resolve_to_first_seen() {
        let summary = summarize(&[
            check_in("tired", 5.0, 5.0),
            check_in("happy", 5.0, 5.0),
            check_in("happy", 5.0, 5.0),
            check_in("tired", 5.0, 5.0),
        ])
        .expect("non-empty");
        assert!(summary.insights.contains("feeling tired"));
    }
}
