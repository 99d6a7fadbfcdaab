use super::constants::keys;

/// Which id/type key pair a node was written with.
///
/// Presentation 3 uses `id` / `type`; image and auth services from the
/// older APIs use the JSON-LD keywords `@id` / `@type`. A decoded node
/// remembers the pair it was read with so it is written back the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyStyle {
    #[default]
    Modern,
    Legacy,
}

impl KeyStyle {
    pub fn id_key(self) -> &'static str {
        match self {
            Self::Modern => keys::ID,
            Self::Legacy => keys::LEGACY_ID,
        }
    }

    pub fn type_key(self) -> &'static str {
        match self {
            Self::Modern => keys::TYPE,
            Self::Legacy => keys::LEGACY_TYPE,
        }
    }

    pub fn is_legacy(self) -> bool {
        matches!(self, Self::Legacy)
    }
}

/// The key styles of a node's id and type, which need not agree.
///
/// `{"@id": .., "type": ..}` is written back with exactly those two keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyStyles {
    pub id: KeyStyle,
    pub kind: KeyStyle,
}

impl KeyStyles {
    pub const MODERN: Self = Self::uniform(KeyStyle::Modern);
    pub const LEGACY: Self = Self::uniform(KeyStyle::Legacy);

    pub const fn uniform(style: KeyStyle) -> Self {
        Self {
            id: style,
            kind: style,
        }
    }

    pub fn id_key(self) -> &'static str {
        self.id.id_key()
    }

    pub fn type_key(self) -> &'static str {
        self.kind.type_key()
    }
}

impl From<KeyStyle> for KeyStyles {
    fn from(style: KeyStyle) -> Self {
        Self::uniform(style)
    }
}
