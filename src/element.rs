/// Elements that take part in organic pi systems.
///
/// The discriminant is the atomic number, so `Element::N as u8 == 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Element {
    H = 1,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    As = 33,
    Se = 34,
    Br = 35,
    Te = 52,
    I = 53,
}

static ALL: [Element; 15] = [
    Element::H,
    Element::B,
    Element::C,
    Element::N,
    Element::O,
    Element::F,
    Element::Si,
    Element::P,
    Element::S,
    Element::Cl,
    Element::As,
    Element::Se,
    Element::Br,
    Element::Te,
    Element::I,
];

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        ALL.iter().copied().find(|e| e.atomic_num() == n)
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        ALL.iter().copied().find(|e| e.symbol() == s)
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::As => "As",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::Te => "Te",
            Element::I => "I",
        }
    }

    /// Number of electrons in the valence shell of the neutral atom.
    pub fn valence_electrons(self) -> u8 {
        match self {
            Element::H => 1,
            Element::B => 3,
            Element::C | Element::Si => 4,
            Element::N | Element::P | Element::As => 5,
            Element::O | Element::S | Element::Se | Element::Te => 6,
            Element::F | Element::Cl | Element::Br | Element::I => 7,
        }
    }

    /// Pauling electronegativity.
    pub fn electronegativity(self) -> f64 {
        match self {
            Element::H => 2.20,
            Element::B => 2.04,
            Element::C => 2.55,
            Element::N => 3.04,
            Element::O => 3.44,
            Element::F => 3.98,
            Element::Si => 1.90,
            Element::P => 2.19,
            Element::S => 2.58,
            Element::Cl => 3.16,
            Element::As => 2.18,
            Element::Se => 2.55,
            Element::Br => 2.96,
            Element::Te => 2.10,
            Element::I => 2.66,
        }
    }

    /// Lowest common valence of the neutral atom (octet rule, no expansion).
    pub fn default_valence(self) -> u8 {
        octet_valence(self.valence_electrons() as i16)
    }
}

/// Valence shell electrons after removing `formal_charge` electrons.
///
/// A cationic nitrogen behaves like carbon (4), an anionic carbon like
/// nitrogen (5). Never negative.
pub fn charged_valence_electrons(element: Element, formal_charge: i8) -> u8 {
    (element.valence_electrons() as i16 - formal_charge as i16).clamp(0, 8) as u8
}

/// Default valence of `element` carrying `formal_charge`.
pub fn charged_default_valence(element: Element, formal_charge: i8) -> u8 {
    octet_valence(charged_valence_electrons(element, formal_charge) as i16)
}

fn octet_valence(electrons: i16) -> u8 {
    if electrons <= 4 {
        electrons.max(0) as u8
    } else {
        (8 - electrons).max(0) as u8
    }
}
