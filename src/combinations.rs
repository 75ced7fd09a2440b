/// Iterator over strictly increasing index selections `i0 < i1 < … < i(k-1)`
/// in `[0, n)`, in lexicographic order.
#[derive(Debug, Clone)]
pub struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Rightmost index that can still move forward.
        let k = self.indices.len();
        let mut i = k;
        while i > 0 && self.indices[i - 1] == self.n - k + i - 1 {
            i -= 1;
        }
        if i == 0 {
            self.done = true;
        } else {
            self.indices[i - 1] += 1;
            for j in i..k {
                self.indices[j] = self.indices[j - 1] + 1;
            }
        }
        Some(current)
    }
}

/// All C(n, k) index selections. `k == 0` yields one empty selection and
/// `k > n` yields none.
pub fn index_combinations(n: usize, k: usize) -> IndexCombinations {
    IndexCombinations {
        n,
        indices: (0..k).collect(),
        done: k > n,
    }
}

/// Element tuples picked by [`index_combinations`] over `items`.
///
/// Combinations are positional: repeated elements yield repeated tuples.
pub struct Combinations<'a, T> {
    items: &'a [T],
    inner: IndexCombinations,
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|picked| picked.into_iter().map(|i| self.items[i].clone()).collect())
    }
}

pub fn combinations<T: Clone>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        inner: index_combinations(items.len(), k),
    }
}
