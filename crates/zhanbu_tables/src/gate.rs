//! The eight gates (bamen) of the person plate.

use serde::{Deserialize, Serialize};

use zhanbu_core::{FiveElement, Locale};

use crate::Auspice;
use crate::palace::Palace;

/// The eight gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    Rest,
    Birth,
    Injury,
    Block,
    Brightness,
    Death,
    Fright,
    Open,
}

/// Rotation order of the eight gates (休生傷杜景死驚開).
pub const GATE_CYCLE: [Gate; 8] = [
    Gate::Rest,
    Gate::Birth,
    Gate::Injury,
    Gate::Block,
    Gate::Brightness,
    Gate::Death,
    Gate::Fright,
    Gate::Open,
];

impl Gate {
    /// Display name of the gate.
    pub const fn name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Rest, Locale::ZhHant) => "休門",
            (Self::Rest, Locale::ZhHans) => "休门",
            (Self::Birth, Locale::ZhHant) => "生門",
            (Self::Birth, Locale::ZhHans) => "生门",
            (Self::Injury, Locale::ZhHant) => "傷門",
            (Self::Injury, Locale::ZhHans) => "伤门",
            (Self::Block, Locale::ZhHant) => "杜門",
            (Self::Block, Locale::ZhHans) => "杜门",
            (Self::Brightness, Locale::ZhHant) => "景門",
            (Self::Brightness, Locale::ZhHans) => "景门",
            (Self::Death, Locale::ZhHant) => "死門",
            (Self::Death, Locale::ZhHans) => "死门",
            (Self::Fright, Locale::ZhHant) => "驚門",
            (Self::Fright, Locale::ZhHans) => "惊门",
            (Self::Open, Locale::ZhHant) => "開門",
            (Self::Open, Locale::ZhHans) => "开门",
        }
    }

    /// Element of the gate.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Rest => FiveElement::Water,
            Self::Birth | Self::Injury => FiveElement::Wood,
            Self::Block | Self::Death => FiveElement::Earth,
            Self::Brightness => FiveElement::Fire,
            Self::Fright | Self::Open => FiveElement::Metal,
        }
    }

    /// Auspice classification (休生景開 auspicious, 傷杜死驚 inauspicious).
    pub const fn auspice(self) -> Auspice {
        match self {
            Self::Rest | Self::Birth | Self::Brightness | Self::Open => Auspice::Auspicious,
            Self::Injury | Self::Block | Self::Death | Self::Fright => Auspice::Inauspicious,
        }
    }

    /// Feature text used in palace explanations.
    pub const fn feature(self) -> &'static str {
        match self {
            Self::Rest => "為吉門，主休養、安寧、平和。適合休息與調養。",
            Self::Birth => "為吉門，主生發、成長、喜慶。適合開始新事物。",
            Self::Injury => "為兇門，主傷害、損失、疾病。需避免沖突與傷害。",
            Self::Block => "為兇門，主阻塞、停滯、困難。事情易受阻礙。",
            Self::Brightness => "為吉門，主光明、展示、明亮。適合公開場合與展示。",
            Self::Death => "為兇門，主衰敗、結束、死亡。不宜開始重要事情。",
            Self::Fright => "為兇門，主驚嚇、變故、突發狀況。需註意意外變化。",
            Self::Open => "為吉門，主通達、順暢、開始。萬事順利，有好的開端。",
        }
    }

    /// Base palace of the gate (1休 8生 3傷 4杜 9景 2死 7驚 6開).
    pub const fn base_palace(self) -> Palace {
        match self {
            Self::Rest => Palace::Kan,
            Self::Birth => Palace::Gen,
            Self::Injury => Palace::Zhen,
            Self::Block => Palace::Xun,
            Self::Brightness => Palace::Li,
            Self::Death => Palace::Kun,
            Self::Fright => Palace::Dui,
            Self::Open => Palace::Qian,
        }
    }

    /// Gate based at the given palace; the center has none.
    pub const fn for_base_palace(palace: Palace) -> Option<Gate> {
        match palace {
            Palace::Kan => Some(Self::Rest),
            Palace::Gen => Some(Self::Birth),
            Palace::Zhen => Some(Self::Injury),
            Palace::Xun => Some(Self::Block),
            Palace::Li => Some(Self::Brightness),
            Palace::Kun => Some(Self::Death),
            Palace::Dui => Some(Self::Fright),
            Palace::Qian => Some(Self::Open),
            Palace::Zhong => None,
        }
    }
}
