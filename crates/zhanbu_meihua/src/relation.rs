//! Body/use five-element relation.

use serde::Serialize;

use zhanbu_core::FiveElement;

/// Relation between the body and use elements, classified through the
/// generative and destructive cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementRelation {
    /// Same element (比和).
    Parity,
    /// Use generates body (用生體), the most favorable.
    UseGeneratesBody,
    /// Body generates use (體生用), draining.
    BodyGeneratesUse,
    /// Body overcomes use (體克用), favorable with restraint.
    BodyOvercomesUse,
    /// Use overcomes body (用克體), unfavorable.
    UseOvercomesBody,
    /// No cycle matched. Unreachable for well-formed element maps; kept
    /// as the explicit default the tests pin down.
    Undetermined,
}

impl ElementRelation {
    /// Classify a body/use element pair.
    pub fn classify(body: FiveElement, yong: FiveElement) -> ElementRelation {
        if body == yong {
            Self::Parity
        } else if yong.generates() == body {
            Self::UseGeneratesBody
        } else if body.generates() == yong {
            Self::BodyGeneratesUse
        } else if body.overcomes() == yong {
            Self::BodyOvercomesUse
        } else if yong.overcomes() == body {
            Self::UseOvercomesBody
        } else {
            Self::Undetermined
        }
    }

    /// Relation label (比和 / 用生體 / …).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Parity => "比和",
            Self::UseGeneratesBody => "用生體",
            Self::BodyGeneratesUse => "體生用",
            Self::BodyOvercomesUse => "體克用",
            Self::UseOvercomesBody => "用克體",
            Self::Undetermined => "未知關係",
        }
    }

    /// Judgement label (大吉 / 吉 / 耗洩 / 凶 / 平).
    pub const fn judgement(self) -> &'static str {
        match self {
            Self::Parity => "吉",
            Self::UseGeneratesBody => "大吉",
            Self::BodyGeneratesUse => "耗洩",
            Self::BodyOvercomesUse => "吉",
            Self::UseOvercomesBody => "凶",
            Self::Undetermined => "平",
        }
    }

    /// Explanatory sentence.
    pub const fn detail(self) -> &'static str {
        match self {
            Self::Parity => "體用同氣相求，力量均衡，行事較為順遂。",
            Self::UseGeneratesBody => "外在環境或對方生扶自身，有助力，易有貴人與資源。",
            Self::BodyGeneratesUse => "自身生扶對方，付出較多，容易疲憊或資源消耗。",
            Self::BodyOvercomesUse => "自身可制約外在，有主導權，但需節制以免過剛。",
            Self::UseOvercomesBody => "外在克制自身，壓力較大，宜守不宜冒進。",
            Self::Undetermined => "體用五行關係不明，需綜合判斷。",
        }
    }

    /// Compact summary, e.g. "用克體（凶）".
    pub fn summary(self) -> String {
        format!("{}（{}）", self.label(), self.judgement())
    }
}
