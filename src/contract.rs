//! Shared behaviour tests run against every [`Vector`](crate::Vector) and
//! [`Matrix`](crate::Matrix) implementation.
//!
//! Each implementation supplies its own constructors; the test bodies only
//! go through the contracts, so a view has to behave exactly like dense
//! storage to pass.

macro_rules! vector_contract {
    (zeros: $zeros:expr, ones: $ones:expr, of: $of:expr $(,)?) => {
        fn vector_contract_zeros(size: usize) -> impl $crate::math::VectorMut + std::fmt::Debug {
            ($zeros)(size)
        }

        fn vector_contract_ones(size: usize) -> impl $crate::math::VectorMut + std::fmt::Debug {
            ($ones)(size)
        }

        fn vector_contract_of(values: &[$crate::math::Num]) -> impl $crate::math::VectorMut + std::fmt::Debug {
            ($of)(values)
        }

        mod vector_contract {
            use std::hash::{DefaultHasher, Hasher as _};

            use super::{vector_contract_of as of, vector_contract_ones as ones, vector_contract_zeros as zeros};
            use $crate::dense::DenseVector;
            use $crate::math::{Matrix as _, MatrixMut as _, Vector, VectorMut as _};

            fn hash_of<V: Vector>(vector: &V) -> u64 {
                let mut state = DefaultHasher::new();
                vector.hash_elements(&mut state);
                state.finish()
            }

            #[test]
            fn zeros_have_size_and_zero_elements() {
                for size in 0..5 {
                    let v = zeros(size);
                    assert_eq!(v.size(), size);
                    assert!(v.iter().all(|x| x == 0.0));
                }
            }

            #[test]
            fn ones_have_size_and_unit_elements() {
                let v = ones(2);
                assert_eq!(v.size(), 2);
                assert_eq!(v.get(0), Ok(1.0));
                assert_eq!(v.get(1), Ok(1.0));
            }

            #[test]
            fn explicit_values_are_kept_in_order() {
                let v = of(&[1.0, 2.0, 3.0, 4.0]);
                assert_eq!(v.size(), 4);
                for (index, expected) in [1.0, 2.0, 3.0, 4.0].into_iter().enumerate() {
                    assert_eq!(v.get(index), Ok(expected));
                }
            }

            #[test]
            fn set_then_get() {
                let mut v = zeros(2);
                v.set(0, 4.0).unwrap();
                v.set(1, -2.0).unwrap();
                assert_eq!(v.get(0), Ok(4.0));
                assert_eq!(v.get(1), Ok(-2.0));
            }

            #[test]
            fn out_of_range_access_is_an_index_error() {
                let mut v = zeros(2);
                assert!(v.get(2).unwrap_err().is_index());
                assert!(v.set(2, 1.0).unwrap_err().is_index());
                assert_eq!(v.get(1), Ok(0.0));
            }

            #[test]
            fn iteration_visits_every_element() {
                let v = of(&[3.0, 1.0, 7.0, 0.0]);
                for (index, value) in v.iter().enumerate() {
                    assert_eq!(v.get(index), Ok(value));
                }
                assert_eq!(v.iter().count(), 4);
                assert_eq!(v.sum(), 11.0);
            }

            #[test]
            fn copy_fills_prefix_of_larger_destination() {
                let source = of(&[3.0, 1.0]);
                let mut dest = zeros(3);
                source.copy_into(&mut dest).unwrap();
                assert_eq!(dest.get(0), Ok(3.0));
                assert_eq!(dest.get(1), Ok(1.0));
                assert_eq!(dest.get(2), Ok(0.0));
            }

            #[test]
            fn copy_into_smaller_destination_fails() {
                let source = of(&[3.0, 1.0]);
                let mut dest = zeros(1);
                assert!(source.copy_into(&mut dest).unwrap_err().is_shape_mismatch());
            }

            #[test]
            fn reshaped_view_aliases_elements() {
                let mut v = of(&[2.0, 1.0, 4.0, 3.0, 0.0, 8.0]);
                {
                    let m = v.as_matrix(2, 3).unwrap();
                    assert_eq!(m.get(0, 0), Ok(2.0));
                    assert_eq!(m.get(0, 2), Ok(4.0));
                    assert_eq!(m.get(1, 0), Ok(3.0));
                    assert_eq!(m.get(1, 2), Ok(8.0));
                }
                v.as_matrix_mut(2, 3).unwrap().set(0, 0, 1.0).unwrap();
                assert_eq!(v.get(0), Ok(1.0));
                assert!(v.as_matrix(3, 3).unwrap_err().is_shape_mismatch());
            }

            #[test]
            fn equality_follows_contents() {
                let first = of(&[1.0, 3.0]);
                let second = of(&[1.0, 3.0]);
                let third = of(&[2.0, 3.0]);
                assert!(first.equals(&second));
                assert!(second.equals(&first));
                assert!(!second.equals(&third));
                assert!(!first.equals(&of(&[1.0, 3.0, 0.0])));
                assert!(first.equals(&DenseVector::from_slice(&[1.0, 3.0])));
            }

            #[test]
            fn equal_vectors_hash_equally() {
                let first = of(&[1.0, -0.0, 2.5]);
                let second = of(&[1.0, 0.0, 2.5]);
                assert!(first.equals(&second));
                assert_eq!(hash_of(&first), hash_of(&second));
                assert_eq!(hash_of(&first), hash_of(&DenseVector::from_slice(&[1.0, 0.0, 2.5])));
            }

            #[test]
            fn dense_copy_is_independent() {
                let mut v = of(&[-3.0, 4.0]);
                let cloned = v.to_dense();
                assert!(v.equals(&cloned));

                v.set(0, 1.0).unwrap();
                assert_eq!(cloned.get(0), Ok(-3.0));
            }

            #[test]
            fn dot_product() {
                let a = of(&[1.0, 2.0, 3.0]);
                let b = of(&[2.0, 1.0, 3.0]);
                assert_eq!(a.dot(&b), Ok(13.0));
                assert_eq!(a.dot(&of(&[2.0, 2.0, 3.0])), Ok(15.0));
                assert!(a.dot(&zeros(2)).unwrap_err().is_shape_mismatch());
            }

            #[test]
            fn display_lists_elements() {
                assert_eq!(of(&[1.0, 2.5, -3.0]).to_display_string(), "[1, 2.5, -3]");
            }
        }
    };
}

macro_rules! matrix_contract {
    (zeros: $zeros:expr, identity: $identity:expr, of: $of:expr $(,)?) => {
        fn matrix_contract_zeros(rows: usize, cols: usize) -> impl $crate::math::MatrixMut + std::fmt::Debug {
            ($zeros)(rows, cols)
        }

        fn matrix_contract_identity(
            size: usize,
        ) -> impl $crate::math::MatrixMut + std::hash::Hash + std::fmt::Debug {
            ($identity)(size)
        }

        fn matrix_contract_of(
            rows: Vec<Vec<$crate::math::Num>>,
        ) -> impl $crate::math::MatrixMut + std::hash::Hash + std::fmt::Debug {
            ($of)(rows)
        }

        mod matrix_contract {
            use std::hash::{DefaultHasher, Hash, Hasher as _};

            use super::{
                matrix_contract_identity as identity, matrix_contract_of as of, matrix_contract_zeros as zeros,
            };
            use $crate::dense::{DenseMatrix, DenseVector};
            use $crate::math::{Matrix as _, MatrixMut as _, Vector as _, VectorMut as _};

            fn hash_of<H: Hash>(value: &H) -> u64 {
                let mut state = DefaultHasher::new();
                value.hash(&mut state);
                state.finish()
            }

            #[test]
            fn zeros_have_shape_and_zero_elements() {
                let m = zeros(2, 1);
                assert_eq!(m.rows(), 2);
                assert_eq!(m.cols(), 1);
                assert_eq!(m.get(0, 0), Ok(0.0));
                assert_eq!(m.get(1, 0), Ok(0.0));
            }

            #[test]
            fn identity_has_unit_diagonal() {
                let m = identity(2);
                assert_eq!(m.shape(), (2, 2));
                assert_eq!(m.get(0, 0), Ok(1.0));
                assert_eq!(m.get(0, 1), Ok(0.0));
                assert_eq!(m.get(1, 0), Ok(0.0));
                assert_eq!(m.get(1, 1), Ok(1.0));
            }

            #[test]
            fn explicit_rows_are_kept() {
                let m = of(vec![vec![2.0, 5.0], vec![1.0, 3.0], vec![0.0, -6.0]]);
                assert_eq!(m.shape(), (3, 2));
                assert_eq!(m.get(0, 1), Ok(5.0));
                assert_eq!(m.get(1, 0), Ok(1.0));
                assert_eq!(m.get(2, 1), Ok(-6.0));
            }

            #[test]
            fn set_then_get_directly_and_through_rows() {
                let mut m = zeros(2, 2);
                m.set(0, 1, 3.0).unwrap();
                assert_eq!(m.get(0, 1), Ok(3.0));
                assert_eq!(m.row(0).unwrap().get(1), Ok(3.0));

                m.row_mut(1).unwrap().set(0, 2.0).unwrap();
                assert_eq!(m.get(1, 0), Ok(2.0));
            }

            #[test]
            fn out_of_range_access_is_an_index_error() {
                let mut m = zeros(2, 3);
                assert!(m.get(2, 0).unwrap_err().is_index());
                assert!(m.get(0, 3).unwrap_err().is_index());
                assert!(m.set(2, 0, 1.0).unwrap_err().is_index());
                assert!(m.row(2).unwrap_err().is_index());
                assert!(m.col(3).unwrap_err().is_index());
            }

            #[test]
            fn column_views_alias_elements() {
                let mut m = zeros(2, 2);
                m.col_mut(1).unwrap().set(1, 4.0).unwrap();
                assert_eq!(m.get(1, 1), Ok(4.0));
                assert_eq!(m.col(1).unwrap().get(1), Ok(4.0));
            }

            #[test]
            fn equality_follows_rows() {
                let first = zeros(2, 3);
                let second = zeros(2, 3);
                assert!(first.equals(&second));
                assert!(!first.equals(&identity(3)));
                assert!(!first.equals(&zeros(2, 2)));
            }

            #[test]
            fn equal_matrices_hash_equally() {
                let first = identity(3);
                let second = DenseMatrix::identity(3);
                assert!(first.equals(&second));
                assert_eq!(hash_of(&first), hash_of(&second));
            }

            #[test]
            fn dense_copy_is_independent() {
                let mut original = identity(2);
                let clone = original.to_dense();
                assert!(original.equals(&clone));

                original.set(0, 0, 2.0).unwrap();
                assert_eq!(clone.get(0, 0), Ok(1.0));
            }

            #[test]
            fn flattened_view_aliases_elements() {
                let mut m = of(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
                {
                    let v = m.as_vector();
                    assert_eq!(v.get(0), Ok(1.0));
                    assert_eq!(v.get(1), Ok(2.0));
                    assert_eq!(v.get(2), Ok(3.0));
                    assert_eq!(v.get(3), Ok(4.0));
                }
                m.as_vector_mut().set(1, 6.0).unwrap();
                assert_eq!(m.get(0, 1), Ok(6.0));
            }

            #[test]
            fn identity_product_leaves_vector_unchanged() {
                let v = DenseVector::from_slice(&[2.0, 4.0, 6.0]);
                assert_eq!(identity(3).mul_vector(&v).unwrap(), v);
            }

            #[test]
            fn product_with_dense_matrix() {
                let a = of(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
                let b = DenseMatrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap();
                let expected = DenseMatrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]]).unwrap();
                assert!(a.mul_matrix(&b).unwrap().equals(&expected));
            }

            #[test]
            fn scalar_division_applies_to_every_element() {
                let mut m = of(vec![vec![2.0, 4.0], vec![-6.0, 8.0]]);
                m.div_assign_scalar(2.0).unwrap();
                let expected = DenseMatrix::from_rows(&[[1.0, 2.0], [-3.0, 4.0]]).unwrap();
                assert!(m.equals(&expected));
            }

            #[test]
            fn display_nests_rows() {
                assert_eq!(identity(2).to_display_string(), "[[1, 0], [0, 1]]");
            }
        }
    };
}

pub(crate) use matrix_contract;
pub(crate) use vector_contract;
