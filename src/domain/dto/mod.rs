//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 누락 우선 검사
//! 요청 DTO의 모든 필드는 `Option<String>`입니다. 역직렬화 단계에서 필드 누락으로
//! 실패하지 않게 하여, "필수 필드 누락" 메시지를 형식 검증보다 먼저 돌려줍니다.
//!
//! ### 2. 유효성 검증 내장
//! `validator` 크레이트의 `#[derive(Validate)]`와 커스텀 함수로
//! 이름/이메일 규칙을 선언합니다.
//!
//! ### 3. 일관된 응답 봉투
//! 모든 응답은 `success`와 `message`를 포함합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/
//!     │   ├── create_user.rs    # 생성 요청
//!     │   ├── update_email.rs   # 이메일 변경 요청 (ID / 이름)
//!     │   └── user_lookup.rs    # ID / 이름 쿼리
//!     └── response/
//!         └── user_response.rs  # 사용자 표현 및 작업별 응답
//! ```

pub mod users;
