//! Console summary printed after a successful run.

use std::fmt;

use postman_template_application::GenerationSummary;

/// Renders the human-readable report: created files, how to import them and
/// what to check first.
pub fn render(summary: &GenerationSummary) -> String {
    Report(summary).to_string()
}

struct Report<'a>(&'a GenerationSummary);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "✅ Postman 파일 생성 완료!")?;
        writeln!(f)?;
        writeln!(f, "📁 생성된 파일:")?;
        writeln!(f, "  - {}", summary.collection_path.display())?;
        writeln!(f, "  - {}", summary.environment_path.display())?;
        writeln!(
            f,
            "  ({} folders, {} requests, {} variables, id {})",
            summary.folder_count, summary.request_count, summary.variable_count, summary.collection_id
        )?;
        writeln!(f)?;
        writeln!(f, "🔧 사용 방법:")?;
        writeln!(f, "1. Postman 앱에서 Import 클릭")?;
        writeln!(f, "2. 생성된 JSON 파일들을 가져오기")?;
        writeln!(f, "3. Environment를 '{}'로 설정", summary.environment_name)?;
        writeln!(f, "4. 로그인 API 실행하여 토큰 자동 저장 확인")?;
        writeln!(f)?;
        writeln!(f, "🚨 주의사항:")?;
        writeln!(f, "- 먼저 애플리케이션을 실행해주세요 (./gradlew bootRun)")?;
        writeln!(f, "- 테스트용 계정을 먼저 생성해주세요 (회원가입 API 사용)")?;
        for warning in &summary.warnings {
            writeln!(f, "- {warning}")?;
        }
        Ok(())
    }
}
