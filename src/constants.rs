//! 물리 상수표. 모두 공개 단위/물리량 연산만으로 만든다.
//!
//! SI 정의 상수는 정확값, 나머지는 CODATA 2018 권고값이다.

use std::f64::consts::PI;

use crate::error::UnitError;
use crate::quantity::Quantity;
use crate::unit::Unit;
use crate::units::{base, electric, energy, force, power, velocity};
use crate::value::Value;

fn unit(value: Result<Value, UnitError>) -> Result<Unit, UnitError> {
    Unit::try_from(value?)
}

fn quantity(value: Result<Value, UnitError>) -> Result<Quantity, UnitError> {
    Quantity::try_from(value?)
}

/// 세슘 초미세 전이 주파수 Δν_Cs.
pub fn caesium_frequency() -> Quantity {
    Quantity::new(9_192_631_770.0, &electric::hertz())
}

/// 진공 중 빛의 속력 c.
pub fn speed_of_light() -> Quantity {
    Quantity::new(299_792_458.0, &velocity::meter_per_second())
}

/// 플랑크 상수 h (J·s).
pub fn planck() -> Result<Quantity, UnitError> {
    let joule_second = unit(energy::joule().multiply(base::second()))?;
    Ok(Quantity::new(6.626_070_15e-34, &joule_second))
}

/// 환산 플랑크 상수 ħ = h / 2π
pub fn reduced_planck() -> Result<Quantity, UnitError> {
    quantity(planck()?.divide(2.0 * PI))
}

/// 기본 전하 e.
pub fn elementary_charge() -> Quantity {
    Quantity::new(1.602_176_634e-19, &electric::coulomb())
}

/// 볼츠만 상수 k (J/K).
pub fn boltzmann() -> Result<Quantity, UnitError> {
    let per_kelvin = unit(energy::joule().divide(base::kelvin()))?;
    Ok(Quantity::new(1.380_649e-23, &per_kelvin))
}

/// 아보가드로 상수 N_A (1/mol).
pub fn avogadro() -> Result<Quantity, UnitError> {
    Ok(Quantity::new(6.022_140_76e23, &base::mole().invert()?))
}

/// 발광 효율 K_cd (lm/W, lm = cd·sr).
pub fn luminous_efficacy() -> Result<Quantity, UnitError> {
    let lumen_per_watt = unit(base::candela().divide(power::watt()))?;
    Ok(Quantity::new(683.0, &lumen_per_watt))
}

/// 만유인력 상수 G (N·m²/kg²).
pub fn gravitational() -> Result<Quantity, UnitError> {
    let m2 = base::meter().power(2.0)?;
    let kg2 = base::kilogram().power(2.0)?;
    let per = unit(unit(force::newton().multiply(m2))?.divide(kg2))?;
    Ok(Quantity::new(6.674_30e-11, &per))
}

/// 표준 중력가속도 g₀.
pub fn standard_gravity() -> Result<Quantity, UnitError> {
    let accel = unit(velocity::meter_per_second().divide(base::second()))?;
    Ok(Quantity::new(force::STANDARD_GRAVITY, &accel))
}

/// 진공 투자율 μ₀ (N/A²).
pub fn vacuum_permeability() -> Result<Quantity, UnitError> {
    let per = unit(force::newton().divide(base::ampere().power(2.0)?))?;
    Ok(Quantity::new(1.256_637_062_12e-6, &per))
}

/// 진공 유전율 ε₀ = 1 / (μ₀ c²)
pub fn vacuum_permittivity() -> Result<Quantity, UnitError> {
    let c2 = speed_of_light().power(2.0)?;
    let mu0_c2 = quantity(vacuum_permeability()?.multiply(c2))?;
    mu0_c2.invert()
}

/// 쿨롱 상수 k_e = 1 / (4π ε₀)
pub fn coulomb_constant() -> Result<Quantity, UnitError> {
    let denom = quantity(vacuum_permittivity()?.multiply(4.0 * PI))?;
    denom.invert()
}

pub fn electron_mass() -> Quantity {
    Quantity::new(9.109_383_701_5e-31, &base::kilogram())
}

pub fn proton_mass() -> Quantity {
    Quantity::new(1.672_621_923_69e-27, &base::kilogram())
}

pub fn neutron_mass() -> Quantity {
    Quantity::new(1.674_927_498_04e-27, &base::kilogram())
}

/// 플랑크 질량 √(ħc/G)
pub fn planck_mass() -> Result<Quantity, UnitError> {
    let hbar_c = quantity(reduced_planck()?.multiply(speed_of_light()))?;
    quantity(hbar_c.divide(gravitational()?))?.power(0.5)
}

/// 플랑크 길이 ħ/(m_P c)
pub fn planck_length() -> Result<Quantity, UnitError> {
    let mp_c = quantity(planck_mass()?.multiply(speed_of_light()))?;
    quantity(reduced_planck()?.divide(mp_c))
}

/// 플랑크 시간 l_P / c
pub fn planck_time() -> Result<Quantity, UnitError> {
    quantity(planck_length()?.divide(speed_of_light()))
}

/// 플랑크 온도 m_P c² / k
pub fn planck_temperature() -> Result<Quantity, UnitError> {
    let c2 = speed_of_light().power(2.0)?;
    let energy = quantity(planck_mass()?.multiply(c2))?;
    quantity(energy.divide(boltzmann()?))
}

/// (기호, 이름, 값) 목록. CLI 출력용.
pub fn table() -> Result<Vec<(&'static str, &'static str, Quantity)>, UnitError> {
    Ok(vec![
        ("Δν_Cs", "caesium hyperfine frequency", caesium_frequency()),
        ("c", "speed of light", speed_of_light()),
        ("h", "Planck constant", planck()?),
        ("ħ", "reduced Planck constant", reduced_planck()?),
        ("e", "elementary charge", elementary_charge()),
        ("k", "Boltzmann constant", boltzmann()?),
        ("N_A", "Avogadro constant", avogadro()?),
        ("K_cd", "luminous efficacy", luminous_efficacy()?),
        ("G", "gravitational constant", gravitational()?),
        ("g₀", "standard gravity", standard_gravity()?),
        ("μ₀", "vacuum permeability", vacuum_permeability()?),
        ("ε₀", "vacuum permittivity", vacuum_permittivity()?),
        ("k_e", "Coulomb constant", coulomb_constant()?),
        ("m_e", "electron mass", electron_mass()),
        ("m_p", "proton mass", proton_mass()),
        ("m_n", "neutron mass", neutron_mass()),
        ("m_P", "Planck mass", planck_mass()?),
        ("l_P", "Planck length", planck_length()?),
        ("t_P", "Planck time", planck_time()?),
        ("T_P", "Planck temperature", planck_temperature()?),
    ])
}
