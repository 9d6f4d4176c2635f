//! Union Canonicalization
//!
//! Every union is built here, so two unions over the same semantic set always
//! have identical members in identical order, and therefore identical names.
//!
//! Steps:
//!
//! 1. **Flatten** nested unions into their members.
//! 2. **Deduplicate** by variant and canonical name, so a generic parameter
//!    never absorbs a member that happens to share its name.
//! 3. **Sort**: non-primitives, then primitives, then `null`; by name within a group.
//! 4. **Remove covered members**: a member assignable to another member is dropped.
//! 5. **Collapse** a single survivor into itself instead of a one-member union.

use std::cmp::Ordering;
use std::mem;

use rustc_hash::FxHashSet;

use crate::errors::TypeError;
use crate::type_system::TypeSystem;
use crate::types::{Type, UnionType};

/// Sort group of a union member: non-primitives first, `null` last.
fn group(ty: &Type) -> u8 {
    if ty.is_null() {
        2
    } else if ty.is_primitive() {
        1
    } else {
        0
    }
}

fn canonical_order((a_name, a): &(String, Type), (b_name, b): &(String, Type)) -> Ordering {
    group(a).cmp(&group(b)).then_with(|| a_name.cmp(b_name))
}

fn push_member(flat: &mut Vec<Type>, member: Type) {
    if let Type::Union(union) = member {
        flat.extend(union.members().iter().cloned());
    } else {
        flat.push(member);
    }
}

impl TypeSystem<'_> {
    /// Unites the given types.
    ///
    /// The result is a [`Type::Union`] only if more than one member survives
    /// canonicalization; otherwise it is the surviving member itself.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::EmptyUnion`] if `types` is empty.
    pub fn union_of<I>(&self, types: I) -> Result<Type, TypeError>
    where
        I: IntoIterator<Item = Type>,
    {
        let mut iter = types.into_iter();
        let Some(first) = iter.next() else {
            return Err(TypeError::EmptyUnion);
        };
        Ok(self.canonicalize(first, iter))
    }

    pub(crate) fn canonicalize<I>(&self, first: Type, rest: I) -> Type
    where
        I: IntoIterator<Item = Type>,
    {
        let mut flat = Vec::new();
        push_member(&mut flat, first);
        for member in rest {
            push_member(&mut flat, member);
        }

        let mut seen = FxHashSet::default();
        let mut named: Vec<(String, Type)> = flat
            .into_iter()
            .map(|ty| (ty.name(), ty))
            .filter(|(name, ty)| seen.insert((mem::discriminant(ty), name.clone())))
            .collect();
        named.sort_by(canonical_order);

        let mut result: Vec<Type> = Vec::with_capacity(named.len());
        for (name, candidate) in named {
            if result
                .iter()
                .any(|existing| self.is_assignable_from(existing, &candidate))
            {
                tracing::trace!(member = %name, "dropping covered union member");
                continue;
            }
            result.retain(|existing| {
                let covered = self.is_assignable_from(&candidate, existing);
                if covered {
                    tracing::trace!(member = %existing, by = %name, "dropping covered union member");
                }
                !covered
            });
            result.push(candidate);
        }

        if result.len() == 1 {
            if let Some(single) = result.pop() {
                return single;
            }
        }
        let union = Type::Union(UnionType::new(result));
        tracing::debug!(ty = %union, "constructed union");
        union
    }
}
