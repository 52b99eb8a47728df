/// 차원/단위/물리량 연산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// 차원 지수가 정수가 아니거나 유한하지 않음
    InvalidDimension(String),
    /// 거듭제곱 결과 차원 지수가 분수가 됨
    NonIntegralDimension(String),
    /// 차원이 서로 다른 두 단위 사이의 덧셈/비교/변환
    Incommensurable { left: String, right: String },
    /// 지원하지 않는 피연산자 조합
    ArithmeticType(String),
    /// 스칼라 0으로 나눔
    DivisionByZero,
}

impl std::fmt::Display for UnitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitError::InvalidDimension(msg) => write!(f, "잘못된 차원 지수: {msg}"),
            UnitError::NonIntegralDimension(msg) => write!(f, "정수가 아닌 차원 지수: {msg}"),
            UnitError::Incommensurable { left, right } => {
                write!(f, "차원이 맞지 않는 단위: {left} 와 {right}")
            }
            UnitError::ArithmeticType(msg) => write!(f, "지원하지 않는 피연산자: {msg}"),
            UnitError::DivisionByZero => write!(f, "0으로 나눌 수 없습니다."),
        }
    }
}

impl std::error::Error for UnitError {}
