//! Override modifier selection and its mapping to event flags.

use super::constants::DEFAULT_OVERRIDE_CODE;

/// Modifier bits as reported in a pointer event's flag word.
///
/// The bit values match `CGEventFlags` so the platform layer can pass the
/// raw flag word straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierFlags(u64);

impl ModifierFlags {
    pub const NONE: ModifierFlags = ModifierFlags(0);
    pub const SHIFT: ModifierFlags = ModifierFlags(0x0002_0000);
    pub const CONTROL: ModifierFlags = ModifierFlags(0x0004_0000);
    pub const ALTERNATE: ModifierFlags = ModifierFlags(0x0008_0000);
    pub const COMMAND: ModifierFlags = ModifierFlags(0x0010_0000);

    pub const fn from_bits(bits: u64) -> Self {
        ModifierFlags(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True if every bit of `other` is set in `self`.
    pub const fn contains(self, other: ModifierFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for ModifierFlags {
    type Output = ModifierFlags;

    fn bitor(self, rhs: ModifierFlags) -> ModifierFlags {
        ModifierFlags(self.0 | rhs.0)
    }
}

/// Keyboard modifier that, while held, lets the pointer reach the Dock
/// trigger zone on any display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverrideModifier {
    /// Never bypass clamping.
    None,
    /// Option (⌥).
    #[default]
    Alt,
    /// Control (⌃).
    Control,
    /// Shift (⇧).
    Shift,
    /// Command (⌘).
    Meta,
}

impl OverrideModifier {
    /// Every option, in menu order.
    pub const ALL: [OverrideModifier; 5] = [
        OverrideModifier::None,
        OverrideModifier::Alt,
        OverrideModifier::Control,
        OverrideModifier::Shift,
        OverrideModifier::Meta,
    ];

    /// Persisted integer code.
    pub fn code(self) -> i64 {
        match self {
            OverrideModifier::None => 0,
            OverrideModifier::Alt => 1,
            OverrideModifier::Control => 2,
            OverrideModifier::Shift => 3,
            OverrideModifier::Meta => 4,
        }
    }

    /// Decode a persisted code. Unknown codes yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(OverrideModifier::None),
            1 => Some(OverrideModifier::Alt),
            2 => Some(OverrideModifier::Control),
            3 => Some(OverrideModifier::Shift),
            4 => Some(OverrideModifier::Meta),
            _ => None,
        }
    }

    /// Decode a persisted code, falling back to the default option.
    pub fn from_code_or_default(code: i64) -> Self {
        Self::from_code(code)
            .or_else(|| Self::from_code(DEFAULT_OVERRIDE_CODE))
            .unwrap_or_default()
    }

    /// The event flag that bypasses clamping, or `None` for "never bypass".
    pub fn flag(self) -> Option<ModifierFlags> {
        match self {
            OverrideModifier::None => None,
            OverrideModifier::Alt => Some(ModifierFlags::ALTERNATE),
            OverrideModifier::Control => Some(ModifierFlags::CONTROL),
            OverrideModifier::Shift => Some(ModifierFlags::SHIFT),
            OverrideModifier::Meta => Some(ModifierFlags::COMMAND),
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            OverrideModifier::None => "None",
            OverrideModifier::Alt => "Option (\u{2325})",
            OverrideModifier::Control => "Control (\u{2303})",
            OverrideModifier::Shift => "Shift (\u{21E7})",
            OverrideModifier::Meta => "Command (\u{2318})",
        }
    }
}
