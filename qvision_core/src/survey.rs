//! Risk-assessment questionnaire (mock producer for survey results).
//!
//! Each question is single-choice with a fixed weight per choice. The score is
//! the sum of chosen weights over the maximum attainable sum. This is a
//! presentation mock, not a clinical model.

use crate::error::{Error, Result};
use crate::types::{Factor, RiskLevel, SurveyResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub weight: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    /// Factor name written into the result.
    pub factor: &'static str,
    pub prompt: &'static str,
    pub choices: &'static [Choice],
}

impl Question {
    pub fn max_weight(&self) -> u32 {
        self.choices.iter().map(|c| c.weight).max().unwrap_or(0)
    }
}

const fn choice(label: &'static str, weight: u32) -> Choice {
    Choice { label, weight }
}

const STANDARD: &[Question] = &[
    Question {
        id: "age",
        factor: "Age",
        prompt: "What is your age?",
        choices: &[
            choice("Under 40", 0),
            choice("40-49", 1),
            choice("50-59", 2),
            choice("60 or older", 3),
        ],
    },
    Question {
        id: "family_history",
        factor: "Family history",
        prompt: "Has a blood relative been diagnosed with breast cancer?",
        choices: &[
            choice("No", 0),
            choice("Second-degree relative", 1),
            choice("One first-degree relative", 2),
            choice("Several first-degree relatives", 3),
        ],
    },
    Question {
        id: "genetic",
        factor: "BRCA1/BRCA2",
        prompt: "Do you carry a known BRCA1 or BRCA2 mutation?",
        choices: &[choice("No", 0), choice("Unknown", 1), choice("Yes", 3)],
    },
    Question {
        id: "biopsy",
        factor: "Prior biopsy",
        prompt: "Have you had a breast biopsy?",
        choices: &[
            choice("Never", 0),
            choice("Benign result", 1),
            choice("Atypical hyperplasia", 3),
        ],
    },
    Question {
        id: "density",
        factor: "Breast density",
        prompt: "What density was reported on your last mammogram?",
        choices: &[
            choice("Almost entirely fatty", 0),
            choice("Scattered fibroglandular", 1),
            choice("Heterogeneously dense", 2),
            choice("Extremely dense", 3),
        ],
    },
    Question {
        id: "menarche",
        factor: "Age at first period",
        prompt: "How old were you at your first menstrual period?",
        choices: &[choice("14 or older", 0), choice("12-13", 1), choice("Under 12", 2)],
    },
    Question {
        id: "first_birth",
        factor: "Age at first birth",
        prompt: "How old were you at your first live birth?",
        choices: &[
            choice("Under 25", 0),
            choice("25-29", 1),
            choice("30 or older, or no births", 2),
        ],
    },
    Question {
        id: "hormone_therapy",
        factor: "Hormone therapy",
        prompt: "Have you used combined hormone replacement therapy?",
        choices: &[choice("Never", 0), choice("In the past", 1), choice("Currently", 2)],
    },
    Question {
        id: "chest_radiation",
        factor: "Chest radiation",
        prompt: "Did you receive chest radiation therapy before age 30?",
        choices: &[choice("No", 0), choice("Yes", 3)],
    },
    Question {
        id: "alcohol",
        factor: "Alcohol intake",
        prompt: "How many alcoholic drinks do you have per day?",
        choices: &[choice("None", 0), choice("About one", 1), choice("Two or more", 2)],
    },
    Question {
        id: "activity",
        factor: "Physical activity",
        prompt: "How physically active are you?",
        choices: &[
            choice("Active most days", 0),
            choice("Occasionally", 1),
            choice("Rarely", 2),
        ],
    },
    Question {
        id: "bmi",
        factor: "Post-menopausal BMI",
        prompt: "If post-menopausal, what is your BMI?",
        choices: &[
            choice("Under 25 or not applicable", 0),
            choice("25-30", 1),
            choice("Over 30", 2),
        ],
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

impl Questionnaire {
    /// The twelve-factor questionnaire shown in the app.
    pub fn standard() -> Self {
        Self::new(STANDARD.to_vec())
    }

    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn max_weight(&self) -> u32 {
        self.questions.iter().map(Question::max_weight).sum()
    }

    /// Score the answers into a [`SurveyResult`].
    ///
    /// Factors follow questionnaire order. Every question must be answered.
    pub fn evaluate(
        &self,
        answers: &Answers,
        id: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Result<SurveyResult> {
        let mut total = 0u32;
        let mut factors = Vec::with_capacity(self.questions.len());

        for (idx, question) in self.questions.iter().enumerate() {
            let Some(picked) = answers.get(idx) else {
                return Err(Error::IncompleteSurvey {
                    question: question.id.to_string(),
                });
            };
            let choice = question
                .choices
                .get(picked)
                .ok_or_else(|| Error::InvalidChoice {
                    question: question.id.to_string(),
                    choice: picked,
                    available: question.choices.len(),
                })?;
            total += choice.weight;
            factors.push(Factor::new(question.factor, choice.label));
        }

        let max = self.max_weight();
        let risk_score = if max == 0 {
            0.0
        } else {
            f64::from(total) / f64::from(max)
        };

        Ok(SurveyResult {
            id: id.into(),
            timestamp: timestamp.into(),
            risk_level: RiskLevel::from_score(risk_score),
            risk_score,
            factors,
        })
    }
}

/// Chosen option index per question, by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Answers {
    picks: Vec<Option<usize>>,
}

impl Answers {
    pub fn for_questionnaire(questionnaire: &Questionnaire) -> Self {
        Self {
            picks: vec![None; questionnaire.len()],
        }
    }

    pub fn answer(&mut self, question: usize, choice: usize) {
        if question >= self.picks.len() {
            self.picks.resize(question + 1, None);
        }
        self.picks[question] = Some(choice);
    }

    pub fn get(&self, question: usize) -> Option<usize> {
        self.picks.get(question).copied().flatten()
    }

    pub fn answered(&self) -> usize {
        self.picks.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_complete_for(&self, questionnaire: &Questionnaire) -> bool {
        (0..questionnaire.len()).all(|idx| self.get(idx).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_answered(q: &Questionnaire, pick: impl Fn(&Question) -> usize) -> Answers {
        let mut answers = Answers::for_questionnaire(q);
        for (idx, question) in q.questions().iter().enumerate() {
            answers.answer(idx, pick(question));
        }
        answers
    }

    #[test]
    fn standard_has_twelve_factors() {
        let q = Questionnaire::standard();
        assert_eq!(q.len(), 12);
        assert_eq!(q.max_weight(), 30);
        assert!(q.questions().iter().all(|question| question.choices.len() >= 2));
    }

    #[test]
    fn lowest_answers_score_zero() {
        let q = Questionnaire::standard();
        let answers = all_answered(&q, |_| 0);
        let result = q.evaluate(&answers, "QS-1", "t0").expect("result");
        assert_eq!(result.risk_score, 0.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.factors.len(), 12);
        assert_eq!(result.factors[0], Factor::new("Age", "Under 40"));
    }

    #[test]
    fn highest_answers_score_one() {
        let q = Questionnaire::standard();
        let answers = all_answered(&q, |question| question.choices.len() - 1);
        let result = q.evaluate(&answers, "QS-2", "t0").expect("result");
        assert_eq!(result.risk_score, 1.0);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.id, "QS-2");
        assert_eq!(result.timestamp, "t0");
    }

    #[test]
    fn unanswered_question_is_reported() {
        let q = Questionnaire::standard();
        let mut answers = all_answered(&q, |_| 0);
        answers.picks[3] = None;
        assert!(!answers.is_complete_for(&q));
        match q.evaluate(&answers, "QS-3", "t0") {
            Err(Error::IncompleteSurvey { question }) => assert_eq!(question, "biopsy"),
            other => panic!("expected incomplete survey, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_choice_is_reported() {
        let q = Questionnaire::standard();
        let mut answers = all_answered(&q, |_| 0);
        answers.answer(8, 5);
        match q.evaluate(&answers, "QS-4", "t0") {
            Err(Error::InvalidChoice {
                question,
                choice,
                available,
            }) => {
                assert_eq!(question, "chest_radiation");
                assert_eq!(choice, 5);
                assert_eq!(available, 2);
            }
            other => panic!("expected invalid choice, got {other:?}"),
        }
    }

    #[test]
    fn answering_past_the_end_grows() {
        let mut answers = Answers::default();
        answers.answer(2, 1);
        assert_eq!(answers.get(2), Some(1));
        assert_eq!(answers.get(0), None);
        assert_eq!(answers.answered(), 1);
    }

    #[test]
    fn empty_questionnaire_scores_zero() {
        let q = Questionnaire::new(vec![]);
        let result = q.evaluate(&Answers::default(), "QS-5", "t0").expect("result");
        assert_eq!(result.risk_score, 0.0);
        assert!(result.factors.is_empty());
    }
}
