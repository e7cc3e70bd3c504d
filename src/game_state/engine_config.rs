/// How a pawn reaching its last rank is promoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionPolicy {
    /// Promote to a queen at once; a following `=X` may still re-promote.
    #[default]
    AutoQueen,
    /// Leave the pawn in place until the front-end submits `=X`.
    AskFrontEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub promotion: PromotionPolicy,
}

impl EngineConfig {
    pub fn with_promotion(promotion: PromotionPolicy) -> Self {
        Self { promotion }
    }
}
