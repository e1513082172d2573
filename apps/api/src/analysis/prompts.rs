// All LLM prompt constants for the analysis module.

/// System prompt for job-fit analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an advanced AI recruiter specializing in comprehensive job fit analysis. \
    Provide an in-depth, nuanced, and actionable analysis of a candidate's resume \
    against a specific job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job-fit analysis prompt template.
/// Replace `{resume}` and `{job_description}` before sending. The embedded
/// JSON block is the machine-checked output contract: the response is
/// deserialized against exactly this structure and rejected wholesale on
/// any mismatch.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Conduct a thorough analysis of the resume below against the job description. Your assessment should be detailed, objective, and provide actionable insights for both the candidate and potential employers.

Input Resume:
{resume}

Job Description:
{job_description}

Return a JSON object with this EXACT schema (no extra fields, no omissions):
{
  "jobFitPercentage": 75,
  "overallAssessment": "Comprehensive summary of the candidate's fit for the role",
  "strengths": [
    {"skill": "Rust", "description": "Why this strength matters for the position"}
  ],
  "areasForImprovement": [
    {"area": "Kubernetes", "suggestion": "Specific, actionable improvement"}
  ],
  "recommendations": [
    "Prioritized, actionable advice with clear rationale"
  ],
  "skillsMatch": {
    "technical": [
      {"skill": "Rust", "matchLevel": "high", "comment": "Detailed match comment"}
    ],
    "soft": [
      {"skill": "Communication", "matchLevel": "medium", "comment": "Detailed match comment"}
    ]
  },
  "experienceAnalysis": [
    {
      "company": "Acme",
      "position": "Engineer",
      "duration": "2020-2022",
      "keyPoints": ["Key accomplishment"],
      "relevance": "How this experience maps to the role"
    }
  ],
  "projectAnalysis": [
    {
      "name": "Project name",
      "description": "What it is",
      "keyPoints": ["Notable point"],
      "relevance": "How it enhances fit for the role"
    }
  ],
  "experienceRelevance": {
    "score": 70,
    "relevantExperiences": [
      {"experience": "Backend work at Acme", "relevance": "Why it aligns"}
    ],
    "missingExperiences": ["Experience the JD asks for that the resume lacks"]
  },
  "educationFit": {"score": 80, "comment": "Relevance and adequacy of education"},
  "cultureFit": {"score": 60, "comment": "Potential cultural fit assessment"},
  "atsImprovements": [
    {"section": "skills", "suggestion": "Concrete ATS-friendliness improvement"}
  ]
}

Rules:
- "matchLevel" must be exactly one of: "high", "medium", "low", "missing".
- All scores and jobFitPercentage are numbers from 0 to 100.
- Every array should be populated when the resume and job description
  contain supporting material; leave an array empty only when there is
  genuinely nothing to report.

Guidelines for Analysis:
1. Overall Assessment: Summarize the candidate's fit considering all aspects of their profile.
2. Strengths: Identify key strengths relevant to the job, explaining their value and direct relevance.
3. Areas for Improvement: Highlight where the candidate could enhance their profile, with specific suggestions and potential impact.
4. Skills Match: Evaluate technical and soft skills with detailed comments on match level.
5. Experience Analysis: Analyze each work experience in depth, noting key points and relevance to the job.
6. Project Analysis: Analyze each project, noting key points, relevance, and skills demonstrated.
7. Experience Relevance: Assess overall alignment with the requirements and identify missing experiences.
8. Education Fit: Evaluate the relevance and adequacy of the educational background.
9. Culture Fit: Assess potential cultural fit based on available information.
10. ATS Improvements: Suggest changes that make the resume friendlier to applicant-tracking systems, with reasoning.

Remember:
- Maintain objectivity, supporting your analysis with specific examples from both the resume and job description.
- Consider explicit and implicit requirements of the job description.
- Quantify your assessments where possible to provide clear metrics.
- Provide recommendations that are practical, achievable, and tailored to this candidate and role."#;

/// System prompt for the chat follow-up.
pub const CHAT_SYSTEM: &str =
    "You are an expert job analysis assistant with years of experience in HR and \
    career counseling. Provide detailed, actionable advice based on the analysis \
    data provided. Maintain a professional, encouraging tone while being honest \
    about areas for improvement.";

/// Chat follow-up prompt template.
/// Replace: {job_fit_percentage}, {overall_assessment}, {strengths},
///          {areas_for_improvement}, {recommendations}, {skills_match},
///          {experience_analysis}, {project_analysis}, {question}
pub const CHAT_PROMPT_TEMPLATE: &str = r#"Candidate Analysis:
1. Job Fit: {job_fit_percentage}%
2. Overall Assessment: {overall_assessment}
3. Key Strengths:
   {strengths}
4. Areas for Improvement:
   {areas_for_improvement}
5. Tailored Recommendations:
   {recommendations}
6. Skills Match Analysis:
   {skills_match}
7. Experience Evaluation:
   {experience_analysis}
8. Project Portfolio Review:
   {project_analysis}

Based on this analysis, please address the following user query:
"{question}"

In your response:
1. Directly answer the user's question, referencing specific points from the analysis.
2. Provide context on how this relates to their overall job fit and career prospects.
3. Offer 2-3 actionable steps the candidate can take to improve in this area.
4. If relevant, suggest how they can leverage their strengths to overcome any weaknesses.
5. Conclude with an encouraging statement that motivates the candidate to take action."#;
