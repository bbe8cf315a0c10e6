use forage_core::Category;

/// Raw per-class scores for one sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Prediction {
    pub scores: Vec<f32>,
}

impl Prediction {
    pub fn new(scores: Vec<f32>) -> Self {
        Self { scores }
    }

    /// Argmax over `scores`; ties go to the lowest ordinal.
    ///
    /// NaN scores never win. An empty or all-NaN score vector yields `Category::INVALID`.
    pub fn predicted_class(&self) -> Category {
        let mut best: Option<(usize, f32)> = None;
        for (i, &score) in self.scores.iter().enumerate() {
            if score.is_nan() {
                continue;
            }
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((i, score)),
            }
        }
        best.and_then(|(i, _)| i32::try_from(i).ok())
            .map(Category)
            .unwrap_or(Category::INVALID)
    }
}

impl From<Vec<f32>> for Prediction {
    fn from(scores: Vec<f32>) -> Self {
        Self::new(scores)
    }
}
