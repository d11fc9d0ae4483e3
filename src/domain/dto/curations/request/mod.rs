//! 큐레이팅 관련 요청 DTO 모듈
//!
//! 큐레이팅(스타일 평가) 등록 요청의 매핑과 검증을 담당합니다.
//! 검증 계약은 스타일 요청 DTO와 동일합니다. 정해진 순서로 검사하고
//! 첫 위반에서 메시지 하나로 중단합니다.

pub mod register_curation;

pub use register_curation::{CurationSubmission, RegisterCurationRequest, MAX_SCORE, MIN_SCORE};
