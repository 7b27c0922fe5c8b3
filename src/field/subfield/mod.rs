use crate::Identifier;

pub mod subfields;

/// Subfield of a MARC data field: a code and its value.
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct Subfield<V = String> {
    identifier: Identifier,
    data: V,
}

impl<V> Subfield<V> {
    pub fn new<Ident: Into<Identifier>>(identifier: Ident, data: V) -> Subfield<V> {
        Subfield {
            identifier: identifier.into(),
            data,
        }
    }

    /// Returns identifier of this subfield
    pub fn get_identifier(&self) -> Identifier {
        self.identifier
    }

    /// Returns data of this subfield without subfield delimiter or identifier.
    pub fn get_data(&self) -> &V {
        &self.data
    }

    pub fn get_data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    pub fn into_data(self) -> V {
        self.data
    }

    pub(crate) fn set_identifier(&mut self, identifier: Identifier) {
        self.identifier = identifier;
    }

    pub(crate) fn map<W, F: FnOnce(V) -> W>(self, fun: F) -> Subfield<W> {
        Subfield {
            identifier: self.identifier,
            data: fun(self.data),
        }
    }
}

impl<Ident: Into<Identifier>, V> From<(Ident, V)> for Subfield<V> {
    fn from((identifier, data): (Ident, V)) -> Subfield<V> {
        Subfield::new(identifier, data)
    }
}

#[cfg(test)]
mod test {
    use super::Subfield;

    #[test]
    fn should_build_subfield() {
        let sf = Subfield::from(('a', String::from("Foo")));
        assert_eq!(sf.get_identifier(), 'a');
        assert_eq!(sf.get_data(), "Foo");
        assert_eq!(sf.into_data(), "Foo");

        let raw = Subfield::new(b'b', b"Bar".to_vec());
        assert_eq!(raw.get_identifier(), 'b');
        assert_eq!(raw.get_data(), b"Bar");
    }
}
