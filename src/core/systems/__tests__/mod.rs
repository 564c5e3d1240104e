//! # 시스템 구성 테스트
