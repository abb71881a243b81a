use croaring::Bitmap;
use std::collections::HashMap;

/// Позиция записи в сторе.
pub type Pos = u32;

/// trigram -> bitmap позиций записей.
#[derive(Default)]
pub struct InvertedIndex {
    doc_count: Pos,
    grams: HashMap<String, Bitmap>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record position and its tokens. Positions must be added in order.
    pub fn add_grams(&mut self, pos: Pos, grams: impl IntoIterator<Item = String>) {
        for g in grams {
            self.grams.entry(g).or_insert_with(Bitmap::new).add(pos);
        }
        self.doc_count = self.doc_count.max(pos + 1);
    }

    pub fn doc_count(&self) -> Pos {
        self.doc_count
    }

    pub fn gram_count(&self) -> usize {
        self.grams.len()
    }

    /// Вселенная: [0, doc_count)
    pub fn all(&self) -> Bitmap {
        let mut acc = Bitmap::new();
        if self.doc_count > 0 {
            acc.add_range(0..self.doc_count);
        }
        acc
    }

    /// Пересечение постингов всех грамм. Пустой список грамм -> все позиции.
    /// Отсутствующая грамма или пустой промежуточный результат -> сразу пусто.
    pub fn intersect_all(&self, grams: &[String]) -> Bitmap {
        let mut it = grams.iter();
        let Some(first) = it.next() else {
            return self.all();
        };
        let Some(seed) = self.grams.get(first) else {
            return Bitmap::new();
        };
        let mut acc = seed.clone();
        for g in it {
            match self.grams.get(g) {
                Some(bm) => acc.and_inplace(bm),
                None => return Bitmap::new(),
            }
            if acc.is_empty() {
                break;
            }
        }
        acc
    }
}
