//! Macros generating operator impls for owned and borrowed operands
//!
//! Numbers are generic, so the impl generics are passed in brackets
//! ahead of the type: `[E: Endianness, W: Digit] NBytes<E, W>`.
//!

/// Implement a binary operator and its assign form for every
/// owned/borrowed combination, forwarding to the by-reference method
/// `$core(&self, &Self) -> Self`
macro_rules! forward_all_binop_to_ref_ref {
    ([$($gen:tt)*] $res:ty, impl $imp:ident::$method:ident, $assign_imp:ident::$assign_method:ident => $core:ident) => {
        impl<$($gen)*> $imp<&$res> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: &$res) -> $res {
                self.$core(rhs)
            }
        }

        impl<$($gen)*> $imp<$res> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $res) -> $res {
                // forward to ref-ref
                self.$core(&rhs)
            }
        }

        impl<$($gen)*> $imp<&$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: &$res) -> $res {
                self.$core(rhs)
            }
        }

        impl<$($gen)*> $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $res) -> $res {
                self.$core(&rhs)
            }
        }

        impl<$($gen)*> $assign_imp<&$res> for $res {
            #[inline]
            fn $assign_method(&mut self, rhs: &$res) {
                *self = self.$core(rhs);
            }
        }

        impl<$($gen)*> $assign_imp<$res> for $res {
            #[inline]
            fn $assign_method(&mut self, rhs: $res) {
                *self = self.$core(&rhs);
            }
        }
    };
}

/// Implement a binary operator between a natural and an integer
///
/// Both operands are converted to the integer type `$res` and combined
/// with `$core(&self, &$res) -> $res`. The assign form is only generated
/// when the left hand side is `$res`.
///
macro_rules! forward_mixed_binop {
    ([$($gen:tt)*] $lhs:ty, $rhs:ty => $res:ty, impl $imp:ident::$method:ident, $assign_imp:ident::$assign_method:ident => $core:ident) => {
        forward_mixed_binop!([$($gen)*] $lhs, $rhs => $res, impl $imp::$method => $core);

        impl<$($gen)*> $assign_imp<&$rhs> for $res {
            #[inline]
            fn $assign_method(&mut self, rhs: &$rhs) {
                *self = self.$core(&<$res>::from(rhs.clone()));
            }
        }

        impl<$($gen)*> $assign_imp<$rhs> for $res {
            #[inline]
            fn $assign_method(&mut self, rhs: $rhs) {
                *self = self.$core(&<$res>::from(rhs));
            }
        }
    };
    ([$($gen:tt)*] $lhs:ty, $rhs:ty => $res:ty, impl $imp:ident::$method:ident => $core:ident) => {
        impl<$($gen)*> $imp<&$rhs> for &$lhs {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: &$rhs) -> $res {
                <$res>::from(self.clone()).$core(&<$res>::from(rhs.clone()))
            }
        }

        impl<$($gen)*> $imp<$rhs> for &$lhs {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $rhs) -> $res {
                <$res>::from(self.clone()).$core(&<$res>::from(rhs))
            }
        }

        impl<$($gen)*> $imp<&$rhs> for $lhs {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: &$rhs) -> $res {
                <$res>::from(self).$core(&<$res>::from(rhs.clone()))
            }
        }

        impl<$($gen)*> $imp<$rhs> for $lhs {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $rhs) -> $res {
                <$res>::from(self).$core(&<$res>::from(rhs))
            }
        }
    };
}

/// Implement a binary operator with primitive right hand side,
/// converting the primitive into the number type first
macro_rules! forward_primitive_binop {
    (@one [$($gen:tt)*] $res:ty, impl $imp:ident::$method:ident, $assign_imp:ident::$assign_method:ident => $core:ident; $t:ty) => {
        impl<$($gen)*> $imp<$t> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $t) -> $res {
                self.$core(&<$res>::from(rhs))
            }
        }

        impl<$($gen)*> $imp<$t> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $t) -> $res {
                self.$core(&<$res>::from(rhs))
            }
        }

        impl<$($gen)*> $assign_imp<$t> for $res {
            #[inline]
            fn $assign_method(&mut self, rhs: $t) {
                *self = self.$core(&<$res>::from(rhs));
            }
        }
    };
    ($gen:tt $res:ty, impl $imp:ident::$method:ident, $assign_imp:ident::$assign_method:ident => $core:ident; $($t:ty),+) => {
        $(
            forward_primitive_binop!(@one $gen $res, impl $imp::$method, $assign_imp::$assign_method => $core; $t);
        )*
    };
}

/// Implement a shift operator for the primitive amount types
///
/// Negative amounts shift in the opposite direction. Amounts that do not
/// fit in `usize` saturate.
///
macro_rules! impl_shift_ops {
    (@signed [$($gen:tt)*] $res:ty, impl $imp:ident::$method:ident => $forward:ident, $backward:ident; $s:ty) => {
        impl<$($gen)*> $imp<$s> for &$res {
            type Output = $res;

            fn $method(self, amount: $s) -> $res {
                let distance = usize::try_from(amount.unsigned_abs()).unwrap_or(usize::MAX);
                if amount < 0 {
                    self.$backward(distance)
                } else {
                    self.$forward(distance)
                }
            }
        }
    };
    (@unsigned [$($gen:tt)*] $res:ty, impl $imp:ident::$method:ident => $forward:ident; $u:ty) => {
        impl<$($gen)*> $imp<$u> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, amount: $u) -> $res {
                self.$forward(usize::try_from(amount).unwrap_or(usize::MAX))
            }
        }
    };
    (@owned [$($gen:tt)*] $res:ty, impl $imp:ident::$method:ident, $assign_imp:ident::$assign_method:ident; $t:ty) => {
        impl<$($gen)*> $imp<$t> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, amount: $t) -> $res {
                $imp::$method(&self, amount)
            }
        }

        impl<$($gen)*> $assign_imp<$t> for $res {
            #[inline]
            fn $assign_method(&mut self, amount: $t) {
                *self = $imp::$method(&*self, amount);
            }
        }
    };
    ($gen:tt $res:ty, impl $imp:ident::$method:ident, $assign_imp:ident::$assign_method:ident => $forward:ident, $backward:ident) => {
        impl_shift_ops!(
            $gen $res, impl $imp::$method, $assign_imp::$assign_method => $forward, $backward;
            signed: i8, i16, i32, i64, i128, isize;
            unsigned: u8, u16, u32, u64, u128, usize
        );
    };
    ($gen:tt $res:ty, impl $imp:ident::$method:ident, $assign_imp:ident::$assign_method:ident => $forward:ident, $backward:ident;
     signed: $($s:ty),*; unsigned: $($u:ty),*) => {
        $(
            impl_shift_ops!(@signed $gen $res, impl $imp::$method => $forward, $backward; $s);
            impl_shift_ops!(@owned $gen $res, impl $imp::$method, $assign_imp::$assign_method; $s);
        )*
        $(
            impl_shift_ops!(@unsigned $gen $res, impl $imp::$method => $forward; $u);
            impl_shift_ops!(@owned $gen $res, impl $imp::$method, $assign_imp::$assign_method; $u);
        )*
    };
}
