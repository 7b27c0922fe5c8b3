use crate::field::subfield::Subfield;

/// Iterator over subfields of a field.
///
/// Every iterator keeps its own position, so a field can be traversed by several iterators at
/// once. The field is borrowed for the iterator's lifetime and can not be mutated meanwhile.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Subfields<'a, V = String> {
    subfields: &'a [Subfield<V>],
    offset: usize,
}

impl<'a, V> Subfields<'a, V> {
    pub(crate) fn new(subfields: &'a [Subfield<V>]) -> Subfields<'a, V> {
        Subfields {
            subfields,
            offset: 0,
        }
    }
}

impl<'a, V> Iterator for Subfields<'a, V> {
    type Item = &'a Subfield<V>;

    fn next(&mut self) -> Option<&'a Subfield<V>> {
        let subfield = self.subfields.get(self.offset)?;
        self.offset += 1;
        Some(subfield)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let bound = self.subfields.len() - self.offset;
        (bound, Some(bound))
    }
}

impl<V> ExactSizeIterator for Subfields<'_, V> {}

#[cfg(test)]
mod test {
    use crate::{field, Field, Identifier};

    #[test]
    fn should_iterate_subfields() {
        let field1: Field =
            field!("979", [' ', ' '], ['b' => "autoreg", 'b' => "autoreh"]).unwrap();
        let field2: Field = Field::new("979", &[' ', ' '], Vec::<(char, String)>::new()).unwrap();
        let field3: Field = field!("001" => "1").unwrap();

        let subfields1: Vec<_> = field1.subfields().collect();
        let subfields2: Vec<_> = field2.subfields().collect();
        let subfields3: Vec<_> = field3.subfields().collect();

        assert_eq!(subfields1.len(), 2);
        assert_eq!(subfields1[1].get_data(), "autoreh");
        assert_eq!(subfields2.len(), 0);
        assert_eq!(subfields3.len(), 0);
    }

    #[test]
    fn should_iterate_independently() {
        let field: Field = field!("245", ['0', '0'], ['a' => "1", 'b' => "2", 'c' => "3"]).unwrap();

        let mut outer = field.subfields();
        let first = outer.next().unwrap();
        let inner: Vec<_> = field.subfields().map(|sf| sf.get_identifier()).collect();
        assert_eq!(inner, vec![Identifier('a'), Identifier('b'), Identifier('c')]);

        assert_eq!(first.get_identifier(), 'a');
        assert_eq!(outer.len(), 2);
        assert_eq!(outer.next().unwrap().get_identifier(), 'b');

        let mut pairs = 0;
        for a in &field {
            for b in &field {
                if a == b {
                    pairs += 1;
                }
            }
        }
        assert_eq!(pairs, 3);
    }
}
