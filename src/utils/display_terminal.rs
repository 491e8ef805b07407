//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 초기화 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 제목, 진행 단계, 레지스트리 요약을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// print_boxed_title("System Started");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// Output: `→ Step 1: Creating Repository instances`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// Output: `✓ Step 1: Repository instances created (4 items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 들여쓰기된 트리 구조로 출력합니다
///
/// Output: `   ├─ product_repository: Created`
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 완료 후 전체 요약을 출력합니다
pub fn print_final_summary(repos: usize, services: usize) {
    let total = repos + services;
    println!();
    print_boxed_title("SERVICE REGISTRY INITIALIZED");
    println!("   Repositories: {}", repos);
    println!("   Services: {}", services);
    println!("   Total Components: {}", total);
    println!();
}

/// 이름 캐시 구성 완료 상태를 출력합니다
///
/// Output: `   ├─ Repository registry: 4 entries loaded`
pub fn print_cache_initialized(registry_type: &str, count: usize) {
    println!("   ├─ {} registry: {} entries loaded", registry_type, count);
}
