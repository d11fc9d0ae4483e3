//! 스타일 보드 백엔드
//!
//! Rust 기반의 스타일(코디) 게시판 및 큐레이팅 서비스입니다.
//! 사용자가 올린 스타일 게시물과 그에 달리는 점수 평가(큐레이팅)를
//! 관리하며, 싱글톤 매크로를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **스타일 게시물**: 등록, 목록/상세 조회, 비밀번호 기반 수정/삭제
//! - **스타일 구성 검증**: 고정된 7개 슬롯(top, bottom, outer, dress,
//!   shoes, bag, accessory) 기반의 닫힌 어휘 검증
//! - **큐레이팅**: 트렌디/개성/실용성/가성비 4개 점수(0~10) 평가 등록
//! - **검증 게이트**: 요청당 하나의 구체적인 메시지를 보장하는
//!   첫-위반-중단 검증
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 게시물/큐레이팅 영구 저장
//! - **Redis**: 상세 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증 게이트 + 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use style_board_backend::services::styles::StyleService;
//! use style_board_backend::services::curations::CurationService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let style_service = StyleService::instance();
//! let curation_service = CurationService::instance();
//!
//! // 스타일 등록 및 큐레이팅 목록 조회
//! let style = style_service.register_style(request).await?;
//! let curations = curation_service.get_curations(&style.id, query).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
