//! 장바구니 비즈니스 로직 모듈

pub mod cart_service;
