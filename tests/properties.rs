//! 차원 벡터, 단순화, 물리량 연산의 성질 기반 테스트.
use std::collections::HashMap;

use proptest::prelude::*;

use dimensional_units::simplify::{decompose, simplify};
use dimensional_units::{Catalog, Dimension, DimensionVector, Quantity, Unit, Value};

// 차원당 지수 -4..=4 인 벡터
fn small_vector() -> impl Strategy<Value = DimensionVector> {
    prop::collection::vec(
        (prop::sample::select(Dimension::ALL.to_vec()), -4i32..=4),
        0..5,
    )
    .prop_map(|entries| DimensionVector::from_exponents(entries).expect("small exponents"))
}

// 2의 거듭제곱 배율은 곱/몫/역수/제곱근이 모두 정확하다. 일반 배율에서는
// 49.0 의 역수의 역수가 49.00000000000001 이 되는 식으로 비트 단위 비교가 깨진다.
fn power_of_two_unit() -> impl Strategy<Value = Unit> {
    (small_vector(), -8i32..=8)
        .prop_map(|(vector, shift)| Unit::new(vector, None, 2f64.powi(shift), 0.0))
}

fn small_value() -> impl Strategy<Value = f64> {
    (-1000i32..1000).prop_map(f64::from)
}

proptest! {
    #[test]
    fn vector_add_then_sub_is_identity(a in small_vector(), b in small_vector()) {
        let sum = a.add(&b).expect("a + b");
        prop_assert_eq!(sum.sub(&b).expect("a + b - b"), a.clone());
        prop_assert_eq!(sum, b.add(&a).expect("b + a"));
    }

    #[test]
    fn decomposition_reassembles_original(v in small_vector()) {
        let catalog = Catalog::default_si();
        let by_symbol: HashMap<&str, &DimensionVector> = catalog
            .units()
            .iter()
            .map(|e| (e.symbol(), e.vector()))
            .collect();
        let mut total = DimensionVector::empty();
        for token in decompose(&v, &catalog) {
            let k = i32::try_from(token.exponent).expect("small exponent");
            let step = by_symbol
                .get(token.symbol.as_str())
                .expect("token symbol comes from the catalog")
                .scale(k)
                .expect("k·unit");
            total = if token.inverted { total.sub(&step) } else { total.add(&step) }
                .expect("partial sum");
        }
        prop_assert_eq!(total, v);
    }

    #[test]
    fn empty_catalog_matches_raw_display(v in small_vector()) {
        prop_assert_eq!(simplify(&v, &Catalog::empty()), v.to_string());
    }

    #[test]
    fn simplify_is_empty_only_for_dimensionless(v in small_vector()) {
        let rendered = simplify(&v, &Catalog::default_si());
        prop_assert_eq!(rendered.is_empty(), v.is_empty());
    }

    /// 배율이 2의 거듭제곱일 때만 비트 단위로 같다.
    #[test]
    fn quantity_multiplication_commutes(
        a in small_value(),
        b in small_value(),
        u in power_of_two_unit(),
        w in power_of_two_unit(),
    ) {
        let qa = Quantity::new(a, &u);
        let qb = Quantity::new(b, &w);
        prop_assert_eq!(qa.multiply(&qb), qb.multiply(&qa));
    }

    #[test]
    fn commensurable_addition_commutes(
        a in small_value(),
        b in small_value(),
        u in power_of_two_unit(),
    ) {
        let qa = Quantity::new(a, &u);
        let qb = Quantity::new(b, &u);
        prop_assert_eq!(qa.add(&qb), qb.add(&qa));
    }

    /// 비아핀 단위에 한정한다. 곱은 오프셋을 버리므로 (°C·m)/m 은 °C 가 아니라 K 이다.
    #[test]
    fn multiply_then_divide_restores_unit(a in power_of_two_unit(), b in power_of_two_unit()) {
        // 곱이 스칼라로 접히거나 a 가 무차원이면 결과가 단위가 아니다
        prop_assume!(!a.vector().is_empty());
        prop_assume!(!a.vector().add(b.vector()).expect("a·b dims").is_empty());
        let ab = a.multiply(&b).expect("a·b");
        prop_assert_eq!(ab.divide(&b).expect("a·b/b"), Value::Unit(a));
    }

    /// 배율이 2의 거듭제곱일 때만 성립한다. 역수는 오프셋을 유지하므로 아핀 단위도 포함한다.
    #[test]
    fn double_inversion_is_identity(u in power_of_two_unit(), offset in -500.0f64..500.0) {
        let affine = Unit::new(u.vector().clone(), None, u.factor(), offset);
        let back = affine.invert().and_then(|inv| inv.invert()).expect("1/(1/u)");
        prop_assert_eq!(back, affine);
    }

    /// 배율이 2의 거듭제곱인 비아핀 단위에 한정한다.
    #[test]
    fn square_then_square_root(u in power_of_two_unit()) {
        let squared = u.power(2.0).expect("square");
        prop_assert_eq!(squared.power(0.5).expect("square root"), u);
    }

    #[test]
    fn convert_back_to_source_unit(x in -1.0e6f64..1.0e6, factor in 0.001f64..1000.0, offset in -500.0f64..500.0) {
        let unit = Unit::new(DimensionVector::of(Dimension::Temperature), None, factor, offset);
        let back = Quantity::new(x, &unit).convert_to(&unit, None).expect("same unit");
        let tol = 1e-9 * (x.abs() + offset.abs() / factor + 1.0);
        prop_assert!((back - x).abs() <= tol, "x={} back={}", x, back);
    }
}
